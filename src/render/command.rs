//! Drawing commands handed to the document writer
//!
//! Both algorithms funnel into the same ordered command sequence: the grid
//! path emits colored cells in raster order, the shapes path emits colored
//! shapes in layering order (largest tier first).

use crate::geometry::PointMapper;
use crate::sampler::{MosaicPass, ShapeKind};
use ndarray::Array2;

/// One colored region to be rendered
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// A grid cell at a downsampled-raster position
    GridCell {
        /// Cell row, 0 at the top of the image
        row: usize,
        /// Cell column, 0 at the left of the image
        col: usize,
        /// Quantized palette level
        level: u8,
    },
    /// A shape in page-space coordinates
    Shape {
        /// Geometry kind
        kind: ShapeKind,
        /// Center in points, `[x, y]`, y-up, relative to the print area
        center_pt: [f64; 2],
        /// Radius in points
        radius_pt: f64,
        /// Quantized palette level
        level: u8,
    },
}

/// One command per cell of a quantized raster, in row-major order
pub fn grid_commands(levels: &Array2<u8>) -> Vec<DrawCommand> {
    levels
        .indexed_iter()
        .map(|((row, col), &level)| DrawCommand::GridCell { row, col, level })
        .collect()
}

/// Commands for a sequence of mosaic passes, preserving tier order
///
/// Each sample's pixel center and radius pass through the mapper, which
/// applies the scale factor and the single page-space y flip.
pub fn shape_commands(passes: &[MosaicPass], mapper: &PointMapper) -> Vec<DrawCommand> {
    passes
        .iter()
        .flat_map(|pass| {
            pass.samples.iter().map(|sample| DrawCommand::Shape {
                kind: sample.kind,
                center_pt: mapper.to_page(sample.center_px[0], sample.center_px[1]),
                radius_pt: mapper.radius_pt(sample.radius_px),
                level: sample.level,
            })
        })
        .collect()
}
