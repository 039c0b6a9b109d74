//! ASCII grid header extraction

use rasterheader::{
    parse_ascii_grid, read_header, AsciiGridKey, AsciiValue, HeaderConfig, HeaderError, NoDataValue, RasterHeader,
};

const EXAMPLE: &str = "ncols 100\nnrows 50\nxllcorner 400000\nyllcorner 5000000\ncellsize 30\nnodata_value -9999";

fn read(bytes: &[u8]) -> Result<RasterHeader, HeaderError> {
    read_header("terrain.asc", bytes, &HeaderConfig::default())
}

#[test]
fn test_example_header() {
    let header = read(EXAMPLE.as_bytes()).unwrap();
    assert_eq!(
        header,
        RasterHeader {
            columns: 100,
            rows: 50,
            origin_x: 400000.0,
            origin_y: 5000000.0,
            cell_size: 30.0,
            no_data_value: NoDataValue::Number(-9999.0),
        }
    );
}

#[test]
fn test_leading_byte_order_mark_is_skipped() {
    let text = format!("\u{feff}{}", EXAMPLE);
    assert_eq!(read(text.as_bytes()).unwrap(), read(EXAMPLE.as_bytes()).unwrap());
}

#[test]
fn test_order_case_and_whitespace_do_not_matter() {
    let text = "  CellSize\t\t30\r\n\r\nYLLCORNER   5000000\nNRows 50\n\n   xllCorner 400000   \nNCOLS    100\nNODATA_value -9999\n";
    assert_eq!(read(text.as_bytes()).unwrap(), read(EXAMPLE.as_bytes()).unwrap());
}

#[test]
fn test_samples_after_header_are_ignored() {
    let mut text = String::from(EXAMPLE);
    text.push('\n');
    for row in 0..50 {
        text.push_str(&format!("{} {} {}\n", row, row + 1, row + 2));
    }
    assert_eq!(read(text.as_bytes()).unwrap().columns, 100);
}

#[test]
fn test_only_leading_bytes_are_scanned() {
    let mut text = " ".repeat(600);
    text.push_str(EXAMPLE);
    assert!(matches!(read(text.as_bytes()), Err(HeaderError::HeaderNotFound)));

    let config = HeaderConfig { scan_limit: 2048, ..HeaderConfig::default() };
    assert!(read_header("terrain.asc", text.as_bytes(), &config).is_ok());
}

#[test]
fn test_duplicate_key_last_wins() {
    let text = format!("{}\ncellsize 10", EXAMPLE);
    assert_eq!(read(text.as_bytes()).unwrap().cell_size, 10.0);
}

#[test]
fn test_multi_token_values_are_joined() {
    let fields = parse_ascii_grid(b"ncols 10\nnodata_value  not   available\n", 500).unwrap();
    assert_eq!(
        fields.get(AsciiGridKey::NoDataValue),
        Some(&AsciiValue::Text("not available".to_string()))
    );
}

#[test]
fn test_text_nodata_is_kept() {
    let text = EXAMPLE.replace("-9999", "none");
    assert_eq!(read(text.as_bytes()).unwrap().no_data_value, NoDataValue::Text("none".to_string()));
}

#[test]
fn test_whole_numbers_are_floats() {
    let fields = parse_ascii_grid(EXAMPLE.as_bytes(), 500).unwrap();
    assert_eq!(fields.get(AsciiGridKey::NCols), Some(&AsciiValue::Number(100.0)));
    assert_eq!(fields.len(), 6);
}

#[test]
fn test_unrecognised_keys_only() {
    let result = read(b"rows 10\ncols 20\nsize 5\n");
    assert!(matches!(result, Err(HeaderError::HeaderNotFound)));
}

#[test]
fn test_empty_input() {
    assert!(matches!(read(b""), Err(HeaderError::HeaderNotFound)));
}

#[test]
fn test_nodata_only_is_missing_required_field() {
    let result = read(b"nodata_value -9999\n");
    assert!(matches!(result, Err(HeaderError::MissingRequiredField("ncols"))));
}

#[test]
fn test_zero_cellsize_is_invalid() {
    let text = EXAMPLE.replace("cellsize 30", "cellsize 0");
    assert!(matches!(read(text.as_bytes()), Err(HeaderError::InvalidHeader(_))));
}

#[test]
fn test_negative_rows_is_invalid() {
    let text = EXAMPLE.replace("nrows 50", "nrows -50");
    assert!(matches!(read(text.as_bytes()), Err(HeaderError::InvalidHeader(_))));
}

#[test]
fn test_parsing_is_repeatable() {
    let first = read(EXAMPLE.as_bytes()).unwrap();
    let second = read(EXAMPLE.as_bytes()).unwrap();
    assert_eq!(first, second);
}
