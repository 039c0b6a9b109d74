//! ASCII grid (.asc/.dem) header parsing
//!
//! The header is a handful of `key value` lines at the very start of the
//! file, ahead of the elevation samples:
//!
//! ```text
//! ncols        100
//! nrows        50
//! xllcorner    400000
//! yllcorner    5000000
//! cellsize     30
//! NODATA_value -9999
//! ```

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, trace};

use crate::error::{HeaderError, HeaderResult};

/// How many leading bytes are scanned for header lines by default
pub const DEFAULT_SCAN_LIMIT: usize = 500;

/// Header keys understood by the parser
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AsciiGridKey {
    NCols,
    NRows,
    XllCorner,
    YllCorner,
    CellSize,
    NoDataValue,
}

impl AsciiGridKey {
    pub const ALL: [AsciiGridKey; 6] = [
        AsciiGridKey::NCols,
        AsciiGridKey::NRows,
        AsciiGridKey::XllCorner,
        AsciiGridKey::YllCorner,
        AsciiGridKey::CellSize,
        AsciiGridKey::NoDataValue,
    ];

    /// Lower-case key as written in the header
    pub fn name(&self) -> &'static str {
        match self {
            AsciiGridKey::NCols => "ncols",
            AsciiGridKey::NRows => "nrows",
            AsciiGridKey::XllCorner => "xllcorner",
            AsciiGridKey::YllCorner => "yllcorner",
            AsciiGridKey::CellSize => "cellsize",
            AsciiGridKey::NoDataValue => "nodata_value",
        }
    }

    /// Looks up an already lower-cased key
    pub fn from_name(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == key)
    }
}

/// A header value: numeric when it starts with a float literal
#[derive(Debug, Clone, PartialEq)]
pub enum AsciiValue {
    Number(f64),
    Text(String),
}

impl AsciiValue {
    pub fn parse(raw: &str) -> Self {
        match leading_float(raw) {
            Some(number) => AsciiValue::Number(number),
            None => AsciiValue::Text(raw.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AsciiValue::Number(n) => Some(*n),
            AsciiValue::Text(_) => None,
        }
    }
}

impl fmt::Display for AsciiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsciiValue::Number(n) => write!(f, "{}", n),
            AsciiValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Recognised header fields, as found
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AsciiGridFields {
    values: BTreeMap<AsciiGridKey, AsciiValue>,
}

impl AsciiGridFields {
    pub fn new() -> Self {
        AsciiGridFields::default()
    }

    /// Stores a value; a later duplicate replaces the earlier one
    pub fn insert(&mut self, key: AsciiGridKey, value: AsciiValue) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: AsciiGridKey) -> Option<&AsciiValue> {
        self.values.get(&key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AsciiGridKey, &AsciiValue)> {
        self.values.iter()
    }
}

/// Scans the first `scan_limit` bytes for ASCII grid header lines
///
/// # Arguments
/// * `bytes` - File contents; anything past `scan_limit` is ignored
/// * `scan_limit` - Number of leading bytes to scan
///
/// # Returns
/// The recognised header fields, `HeaderNotFound` when no recognised key
/// turns up, or `DecodeFailure` when the scanned bytes are not text
pub fn parse_ascii_grid(bytes: &[u8], scan_limit: usize) -> HeaderResult<AsciiGridFields> {
    let text = decode_header_text(&bytes[..bytes.len().min(scan_limit)])?;
    let mut fields = AsciiGridFields::new();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let mut tokens = line.split_whitespace();
        let key = match tokens.next() {
            Some(key) => key.to_lowercase(),
            None => continue,
        };
        let value = tokens.collect::<Vec<_>>().join(" ");
        if value.is_empty() {
            trace!("Skipping header line without value: {:?}", line);
            continue;
        }

        if let Some(key) = AsciiGridKey::from_name(&key) {
            let value = AsciiValue::parse(&value);
            debug!("ASCII grid header {} = {:?}", key.name(), value);
            fields.insert(key, value);
        }
    }

    if fields.is_empty() {
        return Err(HeaderError::HeaderNotFound);
    }

    Ok(fields)
}

/// Byte-order mark some editors put in front of UTF-8 text
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Decodes the scanned prefix as UTF-8, without a leading byte-order mark
///
/// The scan limit may cut a multi-byte character in half; that trailing
/// fragment is dropped. Any other invalid sequence is a decode failure.
fn decode_header_text(bytes: &[u8]) -> HeaderResult<&str> {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) if e.error_len().is_none() => std::str::from_utf8(&bytes[..e.valid_up_to()])
            .map_err(|e| HeaderError::DecodeFailure(e.to_string()))?,
        Err(e) => return Err(HeaderError::DecodeFailure(format!("header is not valid text: {}", e))),
    };

    Ok(text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text))
}

/// Parses the longest leading base-10 float literal, if any
///
/// `"30"`, `"-9999"`, `"1.5e3 m"` all yield a number; `"abc"` and
/// overflowing literals do not.
fn leading_float(value: &str) -> Option<f64> {
    let bytes = value.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = if matches!(bytes.first(), Some(b'+') | Some(b'-')) { 1 } else { 0 };
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+') | Some(b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    value[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
