//! Circular averaging masks for shape color extraction

use crate::io::error::{Result, invalid_parameter};
use ndarray::{Array2, ArrayView2, Zip};

/// Build a normalized circular kernel of the given diameter
///
/// Cells inside the disc `dx^2 + dy^2 <= r^2` (with `r = diameter / 2`,
/// boundary inclusive) share weight `1 / count`; cells outside are zero, so
/// the kernel sums to 1 and applying it yields a plain mean over the disc.
///
/// # Errors
///
/// Returns `InvalidParameter` if `diameter` is zero.
pub fn circle_kernel(diameter: usize) -> Result<Array2<f64>> {
    if diameter == 0 {
        return Err(invalid_parameter(
            "diameter",
            &diameter,
            &"mask diameter must be at least 1 pixel",
        ));
    }

    let r = (diameter / 2) as i64;
    let inside = |row: usize, col: usize| {
        let dy = row as i64 - r;
        let dx = col as i64 - r;
        dx * dx + dy * dy <= r * r
    };

    let mut count = 0usize;
    for row in 0..diameter {
        for col in 0..diameter {
            if inside(row, col) {
                count += 1;
            }
        }
    }

    let weight = 1.0 / count as f64;
    Ok(Array2::from_shape_fn((diameter, diameter), |(row, col)| {
        if inside(row, col) { weight } else { 0.0 }
    }))
}

/// Mean intensity of a raster window under a normalized kernel
///
/// # Errors
///
/// Returns `InvalidParameter` if the window and kernel dimensions differ.
pub fn masked_mean(window: ArrayView2<'_, u8>, kernel: &Array2<f64>) -> Result<f64> {
    if window.dim() != kernel.dim() {
        return Err(invalid_parameter(
            "kernel",
            &format!("{:?}", kernel.dim()),
            &format!("kernel does not match window dimensions {:?}", window.dim()),
        ));
    }
    Ok(Zip::from(window)
        .and(kernel)
        .fold(0.0, |acc, &v, &w| w.mul_add(f64::from(v), acc)))
}
