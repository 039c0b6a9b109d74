//! Decoded container metadata

use std::fmt;

use crate::georeference::TagDictionary;

/// What the container decoder hands to the georeference resolver
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    /// Image width in pixels
    pub columns: u64,
    /// Image height in pixels
    pub rows: u64,
    /// Georeferencing tags found in the first image directory
    pub tags: TagDictionary,
    /// Whether the container is a BigTIFF
    pub is_big_tiff: bool,
}

fn write_values(f: &mut fmt::Formatter<'_>, label: &str, values: Option<&Vec<f64>>) -> fmt::Result {
    match values {
        Some(values) => {
            let joined: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            writeln!(f, "  {}: [{}]", label, joined.join(", "))
        }
        None => writeln!(f, "  {}: not present", label),
    }
}

impl fmt::Display for DecodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Format: {}", if self.is_big_tiff { "BigTIFF" } else { "TIFF" })?;
        writeln!(f, "Dimensions: {}x{}", self.columns, self.rows)?;
        writeln!(f, "Georeferencing tags:")?;
        write_values(f, "ModelTiepoint", self.tags.tie_point.as_ref())?;
        write_values(f, "ModelPixelScale", self.tags.pixel_scale.as_ref())?;
        write_values(f, "ModelTransformation", self.tags.transformation_matrix.as_ref())
    }
}
