use std::fs;
use std::path::Path;

use log::info;

use crate::config::HeaderConfig;
use crate::error::{HeaderError, HeaderResult};
use crate::format::{parse_as, read_header, RasterFormat};
use crate::georeference::{resolve_georeference, TagDictionary};
use crate::header::RasterHeader;
use crate::normalize::{normalize, ParsedHeader};
use crate::tiff::{decode_tagged_image, DecodedImage};

/// Main interface to the library
///
/// Holds only settings, so one extractor can serve any number of files,
/// from any number of threads.
#[derive(Debug, Clone, Default)]
pub struct HeaderExtractor {
    config: HeaderConfig,
}

impl HeaderExtractor {
    /// Create an extractor with the given settings
    ///
    /// # Arguments
    /// * `config` - Scan limit and tie point policy applied to every file
    ///
    /// # Returns
    /// A HeaderExtractor ready to read any number of files
    pub fn new(config: HeaderConfig) -> Self {
        HeaderExtractor { config }
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    /// Extract the header of an uploaded file from its name and contents
    ///
    /// # Arguments
    /// * `file_name` - Name of the file; only its extension is used
    /// * `bytes` - Full contents of the file
    ///
    /// # Returns
    /// The validated RasterHeader or the reason the file was rejected
    pub fn read_bytes(&self, file_name: &str, bytes: &[u8]) -> HeaderResult<RasterHeader> {
        read_header(file_name, bytes, &self.config)
    }

    /// Read a file from disk and extract its header
    ///
    /// Unsupported extensions are rejected before the file is opened.
    /// Files without an extension are identified by their leading bytes.
    ///
    /// # Arguments
    /// * `path` - Path to a .dem, .asc, .tif or .tiff file
    ///
    /// # Returns
    /// The validated RasterHeader or the reason the file was rejected
    pub fn read_path(&self, path: &str) -> HeaderResult<RasterHeader> {
        info!("Reading raster header from {}", path);

        let has_extension = Path::new(path).extension().is_some();
        if has_extension {
            if let RasterFormat::Unsupported(ext) = RasterFormat::from_file_name(path) {
                return Err(HeaderError::UnsupportedFormat(ext));
            }
        }

        let bytes = fs::read(path)?;

        if has_extension {
            return self.read_bytes(path, &bytes);
        }

        let format = RasterFormat::sniff(&bytes).ok_or_else(|| HeaderError::UnsupportedFormat(String::new()))?;
        info!("No extension on {}, detected {}", path, format.name());
        normalize(parse_as(&format, &bytes, &self.config)?)
    }

    /// Build a header from dimensions and tags decoded by the caller
    ///
    /// # Arguments
    /// * `columns` - Image width in pixels
    /// * `rows` - Image height in pixels
    /// * `tags` - GeoTIFF model tags of the image
    ///
    /// # Returns
    /// The validated RasterHeader, or NotGeoreferenced when no strategy applies
    pub fn resolve_tags(&self, columns: u64, rows: u64, tags: &TagDictionary) -> HeaderResult<RasterHeader> {
        let grid = resolve_georeference(columns, rows, tags, self.config.tie_point_policy)?;
        normalize(ParsedHeader::TaggedImage(grid))
    }

    /// Decode dimensions and georeferencing tags of a tagged-image container
    pub fn decode_tags(&self, bytes: &[u8]) -> HeaderResult<DecodedImage> {
        decode_tagged_image(bytes)
    }
}
