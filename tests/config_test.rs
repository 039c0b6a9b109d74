//! Settings loaded from TOML

use rasterheader::{HeaderConfig, HeaderError, HeaderExtractor, TiePointPolicy};

#[test]
fn test_defaults() {
    let config = HeaderConfig::default();
    assert_eq!(config.scan_limit, 500);
    assert_eq!(config.tie_point_policy, TiePointPolicy::AssumeOrigin);
    assert_eq!(HeaderConfig::from_toml_str("").unwrap(), config);
}

#[test]
fn test_overrides() {
    let config = HeaderConfig::from_toml_str(
        "[ascii_grid]\nscan_limit = 4096\n\n[georeference]\ntie_point_policy = \"require-origin\"\n",
    )
    .unwrap();
    assert_eq!(config.scan_limit, 4096);
    assert_eq!(config.tie_point_policy, TiePointPolicy::RequireOrigin);
}

#[test]
fn test_unknown_policy() {
    let result = HeaderConfig::from_toml_str("[georeference]\ntie_point_policy = \"guess\"\n");
    assert!(matches!(result, Err(HeaderError::ConfigError(_))));
}

#[test]
fn test_non_positive_scan_limit() {
    for content in ["[ascii_grid]\nscan_limit = 0\n", "[ascii_grid]\nscan_limit = \"big\"\n"] {
        assert!(matches!(HeaderConfig::from_toml_str(content), Err(HeaderError::ConfigError(_))));
    }
}

#[test]
fn test_malformed_toml() {
    assert!(matches!(HeaderConfig::from_toml_str("[ascii_grid"), Err(HeaderError::ConfigError(_))));
}

#[test]
fn test_extractor_keeps_config() {
    let config = HeaderConfig::from_toml_str("[ascii_grid]\nscan_limit = 64\n").unwrap();
    let extractor = HeaderExtractor::new(config);
    assert_eq!(*extractor.config(), config);
    assert_eq!(*HeaderExtractor::default().config(), HeaderConfig::default());
}
