//! Error types for header extraction

use std::fmt;
use std::io;

/// Failures surfaced by header extraction
///
/// Every variant is terminal for the call that produced it; no partial
/// header is ever returned alongside an error.
#[derive(Debug)]
pub enum HeaderError {
    /// File extension is not one of dem, asc, tif, tiff
    UnsupportedFormat(String),
    /// No recognised ASCII grid key in the scanned bytes
    HeaderNotFound,
    /// A mandatory key is absent (or not numeric, for dimensions)
    MissingRequiredField(&'static str),
    /// Neither tie point + pixel scale nor a transformation matrix was found
    NotGeoreferenced,
    /// Values are present but break the canonical invariants
    InvalidHeader(String),
    /// Bytes could not be interpreted as text or as a tagged-image container
    DecodeFailure(String),
    /// I/O error while reading the input file
    IoError(io::Error),
    /// Invalid configuration file or value
    ConfigError(String),
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::UnsupportedFormat(ext) => write!(
                f,
                "Unsupported file format '{}'. Please use a .dem, .asc, .tif, or .tiff file",
                ext
            ),
            HeaderError::HeaderNotFound => write!(
                f,
                "Could not parse ASCII DEM file header. Please ensure it is a valid format"
            ),
            HeaderError::MissingRequiredField(key) => {
                write!(f, "ASCII DEM header is missing required field '{}'", key)
            }
            HeaderError::NotGeoreferenced => write!(
                f,
                "GeoTIFF file is not georeferenced (missing a supported georeferencing tag)"
            ),
            HeaderError::InvalidHeader(reason) => write!(f, "Invalid raster header: {}", reason),
            HeaderError::DecodeFailure(reason) => write!(f, "Could not decode file: {}", reason),
            HeaderError::IoError(e) => write!(f, "I/O error: {}", e),
            HeaderError::ConfigError(reason) => write!(f, "Configuration error: {}", reason),
        }
    }
}

impl std::error::Error for HeaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeaderError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for HeaderError {
    fn from(error: io::Error) -> Self {
        HeaderError::IoError(error)
    }
}

/// Result type for header extraction
pub type HeaderResult<T> = Result<T, HeaderError>;
