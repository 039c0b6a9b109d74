//! Tagged-image (TIFF/GeoTIFF) container decoding
//!
//! Only the header and the first image directory are read: enough to get
//! the grid dimensions and the tags the georeference resolver needs.

pub(crate) mod constants;
pub mod ifd;
pub mod reader;
pub mod types;
pub(crate) mod validation;
#[cfg(test)]
mod tests;

pub use ifd::{IFD, IFDEntry};
pub use reader::{decode_tagged_image, TiffReader};
pub use types::DecodedImage;
