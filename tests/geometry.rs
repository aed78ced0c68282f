//! Validates orientation selection, print area math, grid sizing, and
//! pixel-to-point coordinate mapping

use paintnum::geometry::{Orientation, PageGeometry, PageSpec, PointMapper};

fn letter_page(margin: f64) -> PageSpec {
    PageSpec::new(612.0, 792.0, margin).expect("letter page spec should validate")
}

#[test]
fn test_orientation_follows_raster_aspect() {
    assert_eq!(Orientation::from_raster_dims(100, 50), Orientation::Portrait);
    assert_eq!(Orientation::from_raster_dims(50, 100), Orientation::Landscape);
    // Ties go to portrait
    assert_eq!(Orientation::from_raster_dims(64, 64), Orientation::Portrait);
}

#[test]
fn test_print_area_subtracts_margins() {
    let geometry = PageGeometry::new(letter_page(72.0), Orientation::Portrait);
    let area = geometry.print_area();
    assert!((area.width_pt - 468.0).abs() < 1e-9);
    assert!((area.height_pt - 648.0).abs() < 1e-9);
}

#[test]
fn test_landscape_swaps_page_axes() {
    let geometry = PageGeometry::new(letter_page(72.0), Orientation::Landscape);
    assert_eq!(geometry.document_dims(), (792.0, 612.0));
    let area = geometry.print_area();
    assert!((area.width_pt - 648.0).abs() < 1e-9);
    assert!((area.height_pt - 468.0).abs() < 1e-9);
}

#[test]
fn test_page_spec_rejects_degenerate_margins() {
    assert!(PageSpec::new(612.0, 792.0, 306.0).is_err());
    assert!(PageSpec::new(612.0, 792.0, 400.0).is_err());
    assert!(PageSpec::new(612.0, 792.0, -1.0).is_err());
    assert!(PageSpec::new(0.0, 792.0, 10.0).is_err());
    assert!(PageSpec::new(612.0, -792.0, 10.0).is_err());
    assert!(PageSpec::new(612.0, 792.0, 0.0).is_ok());
}

#[test]
fn test_grid_size_floors_partial_squares() {
    let geometry = PageGeometry::new(letter_page(72.0), Orientation::Portrait);
    // 468 / 18 = 26 cols, 648 / 18 = 36 rows
    let (rows, cols) = geometry.grid_size(18.0).expect("grid should fit");
    assert_eq!((rows, cols), (36, 26));

    assert!(geometry.grid_size(0.0).is_err());
    assert!(geometry.grid_size(-5.0).is_err());
    assert!(geometry.grid_size(1000.0).is_err());
}

#[test]
fn test_block_size_uses_dominant_axis() {
    let portrait = PageGeometry::new(letter_page(72.0), Orientation::Portrait);
    // Portrait: 260 raster cols across 26 grid cols
    let block = portrait
        .block_size((520, 260), 18.0)
        .expect("block size should compute");
    assert_eq!(block, 10);

    let landscape = PageGeometry::new(letter_page(72.0), Orientation::Landscape);
    // Landscape print area is 648 x 468, so 468 / 18 = 26 grid rows
    let block = landscape
        .block_size((260, 520), 18.0)
        .expect("block size should compute");
    assert_eq!(block, 10);

    // A raster smaller than the grid cannot fill even one pixel per block
    assert!(portrait.block_size((10, 10), 18.0).is_err());
}

#[test]
fn test_points_per_pixel_divides_short_axis_by_long_side() {
    // 100x50 (wide) raster on letter with 1 in margins: landscape print
    // area is 648 x 468 and the scale is 468 / 100 = 4.68 pt/px
    let landscape = PageGeometry::new(letter_page(72.0), Orientation::Landscape);
    let scale = landscape
        .points_per_pixel((50, 100))
        .expect("scale should compute");
    assert!((scale - 4.68).abs() < 1e-9);

    let portrait = PageGeometry::new(letter_page(72.0), Orientation::Portrait);
    let scale = portrait
        .points_per_pixel((64, 64))
        .expect("scale should compute");
    assert!((scale - 468.0 / 64.0).abs() < 1e-9);

    assert!(portrait.points_per_pixel((0, 64)).is_err());
    assert!(portrait.points_per_pixel((64, 0)).is_err());
}

#[test]
fn test_point_mapper_flips_y_exactly_once() {
    let mapper = PointMapper::new(2.0, 100);
    assert_eq!(mapper.to_page(0, 10), [20.0, 200.0]);
    assert_eq!(mapper.to_page(100, 0), [0.0, 0.0]);
    assert_eq!(mapper.to_page(25, 50), [100.0, 150.0]);
    assert!((mapper.radius_pt(5) - 10.0).abs() < 1e-9);
}
