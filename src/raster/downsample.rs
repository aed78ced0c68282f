//! Block-averaging downsampler for grayscale rasters

use crate::io::error::{MosaicError, Result, invalid_parameter};
use ndarray::Array2;

/// Reduce a raster by averaging fixed-size square blocks
///
/// Each output cell is the arithmetic mean of the corresponding
/// `block_size_px` x `block_size_px` window, truncated to u8. Remainder
/// pixels at the bottom/right edges that don't fill a whole block are
/// dropped, never padded or stretched.
///
/// # Errors
///
/// Returns `InvalidParameter` if `block_size_px` is zero or exceeds either
/// raster dimension (the output would be empty).
pub fn block_average(raster: &Array2<u8>, block_size_px: usize) -> Result<Array2<u8>> {
    let (rows, cols) = raster.dim();
    if block_size_px == 0 {
        return Err(invalid_parameter(
            "block_size",
            &block_size_px,
            &"block size must be at least 1 pixel",
        ));
    }
    if block_size_px > rows || block_size_px > cols {
        return Err(invalid_parameter(
            "block_size",
            &block_size_px,
            &format!("block size exceeds raster dimensions ({rows}x{cols})"),
        ));
    }

    let out_rows = rows / block_size_px;
    let out_cols = cols / block_size_px;
    let window_area = (block_size_px * block_size_px) as f64;

    let mut means = Vec::with_capacity(out_rows * out_cols);
    for block in raster.exact_chunks((block_size_px, block_size_px)) {
        let sum: u64 = block.iter().map(|&v| u64::from(v)).sum();
        means.push((sum as f64 / window_area) as u8);
    }

    Array2::from_shape_vec((out_rows, out_cols), means).map_err(|e| {
        MosaicError::InvalidSourceData {
            reason: e.to_string(),
        }
    })
}
