//! Validates tier sequencing, placement bounds, degenerate tiers, and
//! seeded determinism of the shape sampler

use ndarray::Array2;
use paintnum::geometry::PointMapper;
use paintnum::render::shape_commands;
use paintnum::sampler::{MosaicConfig, ShapeMosaic};

fn config(iterations: usize, seed: u64) -> MosaicConfig {
    MosaicConfig {
        iterations,
        num_colors: 8,
        seed,
    }
}

fn gradient_raster(rows: usize, cols: usize) -> Array2<u8> {
    Array2::from_shape_fn((rows, cols), |(row, col)| ((row * 3 + col * 5) % 256) as u8)
}

#[test]
fn test_diameters_halve_per_tier() {
    let raster = gradient_raster(64, 64);
    let mosaic = ShapeMosaic::new(&raster, &config(4, 1)).expect("sampler should build");
    assert_eq!(mosaic.diameters(), &[32, 16, 8, 4]);
}

#[test]
fn test_diameters_reach_zero_without_clamping() {
    let raster = gradient_raster(64, 64);
    let mosaic = ShapeMosaic::new(&raster, &config(8, 1)).expect("sampler should build");
    assert_eq!(mosaic.diameters(), &[32, 16, 8, 4, 2, 1, 0, 0]);
}

#[test]
fn test_planned_samples_follow_area_heuristic() {
    let raster = gradient_raster(64, 64);
    let mosaic = ShapeMosaic::new(&raster, &config(4, 1)).expect("sampler should build");
    // 4096 px² / 32² = 4 samples, / 16² = 16, and so on
    assert_eq!(mosaic.planned_samples(32), 4);
    assert_eq!(mosaic.planned_samples(16), 16);
    assert_eq!(mosaic.planned_samples(4), 256);
    assert_eq!(mosaic.planned_samples(0), 0);
    assert_eq!(mosaic.planned_samples(65), 0);
}

#[test]
fn test_sample_bounding_boxes_stay_inside_raster() {
    let raster = gradient_raster(40, 60);
    let mut mosaic = ShapeMosaic::new(&raster, &config(3, 7)).expect("sampler should build");
    let passes = mosaic.generate().expect("generation should succeed");
    assert_eq!(passes.len(), 3);

    for pass in &passes {
        assert_eq!(pass.samples.len(), (40 * 60) / (pass.diameter_px * pass.diameter_px));
        for sample in &pass.samples {
            assert_eq!(sample.radius_px, pass.diameter_px / 2);
            let origin_row = sample.center_px[0] - sample.radius_px;
            let origin_col = sample.center_px[1] - sample.radius_px;
            assert!(origin_row + pass.diameter_px <= 40);
            assert!(origin_col + pass.diameter_px <= 60);
            assert!(sample.level < 8);
        }
    }
}

#[test]
fn test_degenerate_tiers_yield_empty_passes() {
    let raster = gradient_raster(8, 8);
    let mut mosaic = ShapeMosaic::new(&raster, &config(5, 1)).expect("sampler should build");
    assert_eq!(mosaic.diameters(), &[4, 2, 1, 0, 0]);
    assert!(mosaic.is_degenerate(0));
    assert!(mosaic.is_degenerate(9));
    assert!(!mosaic.is_degenerate(4));

    let empty = mosaic.run_pass(0).expect("degenerate tier is not an error");
    assert!(empty.is_empty());
    let oversized = mosaic.run_pass(9).expect("oversized tier is not an error");
    assert!(oversized.is_empty());
}

#[test]
fn test_constant_raster_quantizes_every_sample_identically() {
    let raster = Array2::from_elem((32, 32), 128u8);
    let mut mosaic = ShapeMosaic::new(&raster, &config(3, 11)).expect("sampler should build");
    let passes = mosaic.generate().expect("generation should succeed");
    for pass in &passes {
        assert!(!pass.is_empty());
        // floor(128 / 32) = 4 for an 8-color palette
        assert!(pass.samples.iter().all(|s| s.level == 4));
    }
}

#[test]
fn test_fixed_seed_reproduces_the_command_sequence() {
    let raster = gradient_raster(48, 48);

    let mut first = ShapeMosaic::new(&raster, &config(3, 99)).expect("sampler should build");
    let passes_a = first.generate().expect("generation should succeed");

    let mut second = ShapeMosaic::new(&raster, &config(3, 99)).expect("sampler should build");
    let passes_b = second.generate().expect("generation should succeed");

    assert_eq!(passes_a, passes_b);

    let mapper = PointMapper::new(1.5, 48);
    assert_eq!(
        shape_commands(&passes_a, &mapper),
        shape_commands(&passes_b, &mapper)
    );
}

#[test]
fn test_invalid_configurations_are_rejected() {
    let raster = gradient_raster(16, 16);
    assert!(ShapeMosaic::new(&raster, &config(0, 1)).is_err());

    let bad_palette = MosaicConfig {
        iterations: 2,
        num_colors: 0,
        seed: 1,
    };
    assert!(ShapeMosaic::new(&raster, &bad_palette).is_err());

    let empty = Array2::zeros((0, 16));
    assert!(ShapeMosaic::new(&empty, &config(2, 1)).is_err());
}
