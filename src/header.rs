//! Canonical raster header

use std::fmt;

/// No-data marker of a raster
#[derive(Debug, Clone, PartialEq)]
pub enum NoDataValue {
    Number(f64),
    Text(String),
    /// The source format does not encode one
    NotApplicable,
}

impl fmt::Display for NoDataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoDataValue::Number(n) => write!(f, "{}", n),
            NoDataValue::Text(s) => write!(f, "{}", s),
            NoDataValue::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Grid size and placement of a raster, whatever format it came from
///
/// Always satisfies `columns > 0`, `rows > 0`, `cell_size > 0`, with finite
/// origin coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterHeader {
    pub columns: u64,
    pub rows: u64,
    /// World X of the lower-left corner
    pub origin_x: f64,
    /// World Y of the lower-left corner
    pub origin_y: f64,
    /// Ground size of one (square) pixel
    pub cell_size: f64,
    pub no_data_value: NoDataValue,
}

impl fmt::Display for RasterHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ncols        {}", self.columns)?;
        writeln!(f, "nrows        {}", self.rows)?;
        writeln!(f, "xllcorner    {}", self.origin_x)?;
        writeln!(f, "yllcorner    {}", self.origin_y)?;
        writeln!(f, "cellsize     {}", self.cell_size)?;
        writeln!(f, "nodata_value {}", self.no_data_value)
    }
}
