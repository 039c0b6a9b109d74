pub mod io;
pub mod tiff;
pub mod utils;
pub mod commands;
pub mod api;
pub mod error;
pub mod config;
pub mod header;
pub mod ascii_grid;
pub mod georeference;
pub mod normalize;
pub mod format;

pub use crate::api::HeaderExtractor;

pub use ascii_grid::{parse_ascii_grid, AsciiGridFields, AsciiGridKey, AsciiValue};
pub use config::HeaderConfig;
pub use error::{HeaderError, HeaderResult};
pub use format::{read_header, route, RasterFormat};
pub use georeference::{resolve_georeference, TagDictionary, TiePointPolicy};
pub use header::{NoDataValue, RasterHeader};
pub use normalize::{normalize, ParsedHeader};
