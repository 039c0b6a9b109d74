//! Format detection and parser dispatch

use std::path::Path;

use log::{debug, info};

use crate::ascii_grid::{parse_ascii_grid, AsciiGridKey};
use crate::config::HeaderConfig;
use crate::error::{HeaderError, HeaderResult};
use crate::georeference::resolve_georeference;
use crate::header::RasterHeader;
use crate::normalize::{normalize, ParsedHeader};
use crate::tiff::decode_tagged_image;

/// Magic bytes of TIFF ("II*\0", "MM\0*") and BigTIFF ("II+\0", "MM\0+")
const TIFF_MAGIC: [[u8; 4]; 4] = [
    [0x49, 0x49, 42, 0],
    [0x4D, 0x4D, 0, 42],
    [0x49, 0x49, 43, 0],
    [0x4D, 0x4D, 0, 43],
];

/// Input format of an uploaded raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterFormat {
    /// Plain-text ASCII grid (.dem, .asc)
    AsciiGrid,
    /// Tagged-image container (.tif, .tiff)
    TaggedImage,
    /// Anything else, with the offending extension
    Unsupported(String),
}

impl RasterFormat {
    /// Picks the format from the file extension, ignoring case
    pub fn from_file_name(file_name: &str) -> Self {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match extension.as_str() {
            "dem" | "asc" => RasterFormat::AsciiGrid,
            "tif" | "tiff" => RasterFormat::TaggedImage,
            _ => RasterFormat::Unsupported(extension),
        }
    }

    /// Guesses the format from leading bytes, for files without a usable name
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.len() >= 4 && TIFF_MAGIC.iter().any(|magic| bytes[..4] == magic[..]) {
            return Some(RasterFormat::TaggedImage);
        }

        let first_word = bytes
            .split(|b| b.is_ascii_whitespace())
            .find(|word| !word.is_empty())?;
        let first_word = std::str::from_utf8(first_word).ok()?.to_ascii_lowercase();
        AsciiGridKey::from_name(&first_word).map(|_| RasterFormat::AsciiGrid)
    }

    pub fn name(&self) -> &str {
        match self {
            RasterFormat::AsciiGrid => "ASCII grid",
            RasterFormat::TaggedImage => "GeoTIFF",
            RasterFormat::Unsupported(ext) => ext,
        }
    }
}

/// Runs the parser for `format` over `bytes`
pub fn parse_as(format: &RasterFormat, bytes: &[u8], config: &HeaderConfig) -> HeaderResult<ParsedHeader> {
    match format {
        RasterFormat::AsciiGrid => parse_ascii_grid(bytes, config.scan_limit).map(ParsedHeader::AsciiGrid),
        RasterFormat::TaggedImage => {
            let image = decode_tagged_image(bytes)?;
            resolve_georeference(image.columns, image.rows, &image.tags, config.tie_point_policy)
                .map(ParsedHeader::TaggedImage)
        }
        RasterFormat::Unsupported(ext) => Err(HeaderError::UnsupportedFormat(ext.clone())),
    }
}

/// Selects a parser by file name and runs it; no bytes are read for
/// unsupported extensions
pub fn route(file_name: &str, bytes: &[u8], config: &HeaderConfig) -> HeaderResult<ParsedHeader> {
    let format = RasterFormat::from_file_name(file_name);
    debug!("Routing {} as {:?}", file_name, format);
    parse_as(&format, bytes, config)
}

/// Extracts the canonical header of a named file
pub fn read_header(file_name: &str, bytes: &[u8], config: &HeaderConfig) -> HeaderResult<RasterHeader> {
    let header = normalize(route(file_name, bytes, config)?)?;
    info!("Extracted header from {}: {}x{} cells of {}", file_name, header.columns, header.rows, header.cell_size);
    Ok(header)
}
