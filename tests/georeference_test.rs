//! Georeferencing of tagged images from their model tags

use rasterheader::{resolve_georeference, HeaderError, HeaderExtractor, NoDataValue, TagDictionary, TiePointPolicy};

mod common;

const TIE_POINT: [f64; 6] = [0.0, 0.0, 0.0, 500000.0, 4500000.0, 0.0];
const PIXEL_SCALE: [f64; 3] = [10.0, 10.0, 0.0];

#[test]
fn test_tie_point_and_scale() {
    let tags = TagDictionary::new().with_tie_point(&TIE_POINT).with_pixel_scale(&PIXEL_SCALE);
    let header = HeaderExtractor::default().resolve_tags(200, 100, &tags).unwrap();

    assert_eq!((header.columns, header.rows), (200, 100));
    assert_eq!(header.origin_x, 500000.0);
    assert_eq!(header.origin_y, 4499000.0);
    assert_eq!(header.cell_size, 10.0);
    assert_eq!(header.no_data_value, NoDataValue::NotApplicable);
}

#[test]
fn test_transformation_matrix() {
    let tags = TagDictionary::new().with_transformation_matrix(&common::matrix(10.0, 500000.0, -10.0, 4500000.0));
    let header = HeaderExtractor::default().resolve_tags(200, 100, &tags).unwrap();

    assert_eq!(header.origin_x, 500000.0);
    assert_eq!(header.origin_y, 4499000.0);
    assert_eq!(header.cell_size, 10.0);
    assert_eq!(header.no_data_value, NoDataValue::NotApplicable);
}

#[test]
fn test_tie_point_wins_over_matrix() {
    let tags = TagDictionary::new()
        .with_tie_point(&TIE_POINT)
        .with_pixel_scale(&PIXEL_SCALE)
        .with_transformation_matrix(&common::matrix(2.0, 0.0, -2.0, 1000.0));

    let grid = resolve_georeference(200, 100, &tags, TiePointPolicy::AssumeOrigin).unwrap();
    assert_eq!(grid.strategy, "tie point + pixel scale");
    assert_eq!(grid.cell_size, 10.0);
    assert_eq!(grid.origin_y, 4499000.0);
}

#[test]
fn test_matrix_used_when_scale_missing() {
    let tags = TagDictionary::new()
        .with_tie_point(&TIE_POINT)
        .with_transformation_matrix(&common::matrix(2.0, 0.0, -2.0, 1000.0));

    let grid = resolve_georeference(200, 100, &tags, TiePointPolicy::AssumeOrigin).unwrap();
    assert_eq!(grid.strategy, "transformation matrix");
    assert_eq!(grid.origin_y, 800.0);
}

#[test]
fn test_no_tags_is_not_georeferenced() {
    let result = HeaderExtractor::default().resolve_tags(200, 100, &TagDictionary::new());
    assert!(matches!(result, Err(HeaderError::NotGeoreferenced)));
}

#[test]
fn test_offset_tie_point_policies() {
    let tie_point = [10.0, 10.0, 0.0, 500100.0, 4499900.0, 0.0];
    let tags = TagDictionary::new().with_tie_point(&tie_point).with_pixel_scale(&PIXEL_SCALE);

    let assumed = resolve_georeference(200, 100, &tags, TiePointPolicy::AssumeOrigin).unwrap();
    assert_eq!(assumed.origin_x, 500100.0);

    let required = resolve_georeference(200, 100, &tags, TiePointPolicy::RequireOrigin);
    assert!(matches!(required, Err(HeaderError::InvalidHeader(_))));
}

#[test]
fn test_zero_scale_is_invalid() {
    let tags = TagDictionary::new().with_tie_point(&TIE_POINT).with_pixel_scale(&[0.0, 0.0, 0.0]);
    let result = HeaderExtractor::default().resolve_tags(200, 100, &tags);
    assert!(matches!(result, Err(HeaderError::InvalidHeader(_))));
}

#[test]
fn test_zero_dimensions_are_invalid() {
    let tags = TagDictionary::new().with_tie_point(&TIE_POINT).with_pixel_scale(&PIXEL_SCALE);
    let result = HeaderExtractor::default().resolve_tags(0, 100, &tags);
    assert!(matches!(result, Err(HeaderError::InvalidHeader(_))));
}
