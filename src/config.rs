//! Extraction settings
//!
//! Defaults match the behaviour users expect from the web uploader; a TOML
//! file can override them:
//!
//! ```toml
//! [ascii_grid]
//! scan_limit = 500
//!
//! [georeference]
//! tie_point_policy = "require-origin"
//! ```

use std::fs;

use log::debug;

use crate::ascii_grid::DEFAULT_SCAN_LIMIT;
use crate::error::{HeaderError, HeaderResult};
use crate::georeference::TiePointPolicy;

/// Settings shared by every extraction call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Leading bytes scanned for ASCII grid header lines
    pub scan_limit: usize,
    /// Treatment of tie points not anchored at pixel (0, 0)
    pub tie_point_policy: TiePointPolicy,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        HeaderConfig {
            scan_limit: DEFAULT_SCAN_LIMIT,
            tie_point_policy: TiePointPolicy::default(),
        }
    }
}

impl HeaderConfig {
    /// Parses settings from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> HeaderResult<Self> {
        let toml_value: toml::Table = content
            .parse()
            .map_err(|e| HeaderError::ConfigError(format!("failed to parse TOML: {}", e)))?;

        let mut config = HeaderConfig::default();

        if let Some(value) = toml_value.get("ascii_grid").and_then(|t| t.get("scan_limit")) {
            config.scan_limit = value
                .as_integer()
                .filter(|limit| *limit > 0)
                .and_then(|limit| usize::try_from(limit).ok())
                .ok_or_else(|| {
                    HeaderError::ConfigError(format!("ascii_grid.scan_limit must be a positive integer, got {}", value))
                })?;
        }

        if let Some(value) = toml_value.get("georeference").and_then(|t| t.get("tie_point_policy")) {
            config.tie_point_policy = value
                .as_str()
                .and_then(TiePointPolicy::from_name)
                .ok_or_else(|| {
                    HeaderError::ConfigError(format!(
                        "georeference.tie_point_policy must be \"assume-origin\" or \"require-origin\", got {}",
                        value
                    ))
                })?;
        }

        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    /// Loads settings from a TOML file
    pub fn from_file(path: &str) -> HeaderResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
