//! Mapping of parser output onto the canonical `RasterHeader`

use log::debug;

use crate::ascii_grid::{AsciiGridFields, AsciiGridKey, AsciiValue};
use crate::error::{HeaderError, HeaderResult};
use crate::georeference::GeoreferencedGrid;
use crate::header::{NoDataValue, RasterHeader};

/// Raw parser output, tagged with the format it came from
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedHeader {
    AsciiGrid(AsciiGridFields),
    TaggedImage(GeoreferencedGrid),
}

/// Converts parser output into a validated `RasterHeader`
pub fn normalize(parsed: ParsedHeader) -> HeaderResult<RasterHeader> {
    let header = match parsed {
        ParsedHeader::AsciiGrid(fields) => from_ascii_grid(&fields)?,
        ParsedHeader::TaggedImage(grid) => {
            debug!("Normalizing tagged image placed by {}", grid.strategy);
            RasterHeader {
                columns: grid.columns,
                rows: grid.rows,
                origin_x: grid.origin_x,
                origin_y: grid.origin_y,
                cell_size: grid.cell_size,
                no_data_value: NoDataValue::NotApplicable,
            }
        }
    };

    validate(&header)?;
    Ok(header)
}

fn from_ascii_grid(fields: &AsciiGridFields) -> HeaderResult<RasterHeader> {
    let columns = dimension(fields, AsciiGridKey::NCols)?;
    let rows = dimension(fields, AsciiGridKey::NRows)?;

    let no_data_value = match fields.get(AsciiGridKey::NoDataValue) {
        Some(AsciiValue::Number(n)) => NoDataValue::Number(*n),
        Some(AsciiValue::Text(s)) => NoDataValue::Text(s.clone()),
        None => NoDataValue::NotApplicable,
    };

    Ok(RasterHeader {
        columns,
        rows,
        origin_x: coordinate(fields, AsciiGridKey::XllCorner)?,
        origin_y: coordinate(fields, AsciiGridKey::YllCorner)?,
        cell_size: coordinate(fields, AsciiGridKey::CellSize)?,
        no_data_value,
    })
}

/// ncols/nrows: present, numeric and a whole number of at least one
fn dimension(fields: &AsciiGridFields, key: AsciiGridKey) -> HeaderResult<u64> {
    let value = fields
        .get(key)
        .and_then(AsciiValue::as_number)
        .ok_or(HeaderError::MissingRequiredField(key.name()))?;

    if value < 1.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(HeaderError::InvalidHeader(format!(
            "{} must be a positive whole number, got {}",
            key.name(),
            value
        )));
    }

    Ok(value as u64)
}

fn coordinate(fields: &AsciiGridFields, key: AsciiGridKey) -> HeaderResult<f64> {
    match fields.get(key) {
        Some(AsciiValue::Number(n)) => Ok(*n),
        Some(AsciiValue::Text(s)) => Err(HeaderError::InvalidHeader(format!(
            "{} is not numeric: {:?}",
            key.name(),
            s
        ))),
        None => Err(HeaderError::MissingRequiredField(key.name())),
    }
}

/// Checks the canonical invariants
pub fn validate(header: &RasterHeader) -> HeaderResult<()> {
    if header.columns == 0 || header.rows == 0 {
        return Err(HeaderError::InvalidHeader(format!(
            "grid dimensions must be positive, got {}x{}",
            header.columns, header.rows
        )));
    }
    if !(header.cell_size.is_finite() && header.cell_size > 0.0) {
        return Err(HeaderError::InvalidHeader(format!(
            "cell size must be positive, got {}",
            header.cell_size
        )));
    }
    if !header.origin_x.is_finite() || !header.origin_y.is_finite() {
        return Err(HeaderError::InvalidHeader(format!(
            "origin must be finite, got ({}, {})",
            header.origin_x, header.origin_y
        )));
    }
    Ok(())
}
