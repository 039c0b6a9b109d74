//! Georeferencing from GeoTIFF model tags
//!
//! A tagged image is placed in world space either by a tie point plus a
//! pixel scale, or by a full affine transformation matrix. The resolver
//! tries these in a fixed order and reports the grid's lower-left corner.

use log::{debug, warn};

use crate::error::{HeaderError, HeaderResult};

/// Values in one tie point: raster (i, j, k) then world (x, y, z)
pub const TIE_POINT_LEN: usize = 6;
/// Values in a pixel scale: (x, y, z)
pub const PIXEL_SCALE_LEN: usize = 3;
/// Values in a row-major 4x4 transformation matrix
pub const TRANSFORMATION_MATRIX_LEN: usize = 16;

/// Georeferencing tags decoded from a tagged-image container
///
/// Sequences shorter than their required length are treated as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagDictionary {
    /// ModelTiepointTag: (i, j, k, x, y, z), possibly repeated
    pub tie_point: Option<Vec<f64>>,
    /// ModelPixelScaleTag: (scale_x, scale_y, scale_z)
    pub pixel_scale: Option<Vec<f64>>,
    /// ModelTransformationTag: 16 values, row-major
    pub transformation_matrix: Option<Vec<f64>>,
}

impl TagDictionary {
    pub fn new() -> Self {
        TagDictionary::default()
    }

    pub fn with_tie_point(mut self, values: &[f64]) -> Self {
        self.tie_point = Some(values.to_vec());
        self
    }

    pub fn with_pixel_scale(mut self, values: &[f64]) -> Self {
        self.pixel_scale = Some(values.to_vec());
        self
    }

    pub fn with_transformation_matrix(mut self, values: &[f64]) -> Self {
        self.transformation_matrix = Some(values.to_vec());
        self
    }

    pub fn tie_point(&self) -> Option<&[f64]> {
        sized(&self.tie_point, TIE_POINT_LEN, "ModelTiepoint")
    }

    pub fn pixel_scale(&self) -> Option<&[f64]> {
        sized(&self.pixel_scale, PIXEL_SCALE_LEN, "ModelPixelScale")
    }

    pub fn transformation_matrix(&self) -> Option<&[f64]> {
        sized(&self.transformation_matrix, TRANSFORMATION_MATRIX_LEN, "ModelTransformation")
    }
}

fn sized<'a>(values: &'a Option<Vec<f64>>, len: usize, name: &str) -> Option<&'a [f64]> {
    let values = values.as_deref()?;
    if values.len() < len {
        warn!("{} tag has {} values, expected {}; ignoring it", name, values.len(), len);
        return None;
    }
    Some(&values[..len])
}

/// How to treat a tie point that does not anchor raster pixel (0, 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiePointPolicy {
    /// Use the tie point's world coordinate as the top-left corner regardless
    #[default]
    AssumeOrigin,
    /// Fail with `InvalidHeader` unless the tie point is at pixel (0, 0)
    RequireOrigin,
}

impl TiePointPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            TiePointPolicy::AssumeOrigin => "assume-origin",
            TiePointPolicy::RequireOrigin => "require-origin",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "assume-origin" => Some(TiePointPolicy::AssumeOrigin),
            "require-origin" => Some(TiePointPolicy::RequireOrigin),
            _ => None,
        }
    }
}

/// Grid placement that does not yet depend on the row count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridAnchor {
    /// World X of the left edge
    pub origin_x: f64,
    /// World Y of the top edge
    pub top_y: f64,
    /// Change in world Y per row going down (negative for north-up)
    pub row_step: f64,
    /// Ground size of one pixel
    pub cell_size: f64,
}

impl GridAnchor {
    /// World Y of the bottom edge of a grid with `rows` rows
    pub fn lower_y(&self, rows: u64) -> f64 {
        self.top_y + rows as f64 * self.row_step
    }
}

/// One way of placing a grid from the tag dictionary
#[derive(Clone, Copy)]
pub struct GeoreferenceStrategy {
    pub name: &'static str,
    pub resolve: fn(&TagDictionary) -> Option<GridAnchor>,
}

/// Strategies in priority order; the first that resolves wins
pub const STRATEGIES: [GeoreferenceStrategy; 2] = [
    GeoreferenceStrategy {
        name: "tie point + pixel scale",
        resolve: tie_point_and_scale,
    },
    GeoreferenceStrategy {
        name: "transformation matrix",
        resolve: affine_transform,
    },
];

/// Tie point plus pixel scale; assumes the tie point is pixel (0, 0)
pub fn tie_point_and_scale(tags: &TagDictionary) -> Option<GridAnchor> {
    let tie_point = tags.tie_point()?;
    let scale = tags.pixel_scale()?;

    Some(GridAnchor {
        origin_x: tie_point[3],
        top_y: tie_point[4],
        row_step: -scale[1],
        cell_size: scale[0],
    })
}

/// Affine transform: x-scale [0], x-translation [3], y-scale [5], y-translation [7]
pub fn affine_transform(tags: &TagDictionary) -> Option<GridAnchor> {
    let matrix = tags.transformation_matrix()?;

    Some(GridAnchor {
        origin_x: matrix[3],
        top_y: matrix[7],
        row_step: matrix[5],
        cell_size: matrix[0],
    })
}

/// A tagged image placed in world space, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct GeoreferencedGrid {
    pub columns: u64,
    pub rows: u64,
    /// World X of the lower-left corner
    pub origin_x: f64,
    /// World Y of the lower-left corner
    pub origin_y: f64,
    pub cell_size: f64,
    /// Name of the strategy that placed the grid
    pub strategy: &'static str,
}

/// Places a `columns` x `rows` grid using the first strategy that resolves
///
/// # Arguments
/// * `columns` - Image width in pixels
/// * `rows` - Image height in pixels
/// * `tags` - GeoTIFF model tags of the image
/// * `policy` - Treatment of tie points not anchored at pixel (0, 0)
///
/// # Returns
/// The grid with its lower-left corner, or `NotGeoreferenced` when no
/// strategy has the tags it needs
pub fn resolve_georeference(
    columns: u64,
    rows: u64,
    tags: &TagDictionary,
    policy: TiePointPolicy,
) -> HeaderResult<GeoreferencedGrid> {
    if policy == TiePointPolicy::RequireOrigin {
        check_tie_point_origin(tags)?;
    }

    for strategy in &STRATEGIES {
        if let Some(anchor) = (strategy.resolve)(tags) {
            debug!("Georeferenced with {}: {:?}", strategy.name, anchor);
            return Ok(GeoreferencedGrid {
                columns,
                rows,
                origin_x: anchor.origin_x,
                origin_y: anchor.lower_y(rows),
                cell_size: anchor.cell_size,
                strategy: strategy.name,
            });
        }
    }

    Err(HeaderError::NotGeoreferenced)
}

fn check_tie_point_origin(tags: &TagDictionary) -> HeaderResult<()> {
    if tags.pixel_scale().is_none() {
        return Ok(());
    }
    if let Some(tie_point) = tags.tie_point() {
        if tie_point[0] != 0.0 || tie_point[1] != 0.0 {
            return Err(HeaderError::InvalidHeader(format!(
                "tie point anchors raster pixel ({}, {}), expected (0, 0)",
                tie_point[0], tie_point[1]
            )));
        }
    }
    Ok(())
}
