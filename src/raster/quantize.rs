//! Intensity quantization into a small palette of levels

use crate::io::error::{Result, invalid_parameter};
use ndarray::Array2;
use num_traits::ToPrimitive;

/// Maps 8-bit intensities into `num_colors` evenly sized buckets
///
/// The bucket width `256 / num_colors` is real-valued, so palette sizes that
/// don't divide 256 still cover the full intensity range.
#[derive(Clone, Copy, Debug)]
pub struct Quantizer {
    num_colors: usize,
    bucket_width: f64,
}

impl Quantizer {
    /// Create a quantizer for the given palette size
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `num_colors` is zero or exceeds 256
    /// (more levels than distinct 8-bit intensities).
    pub fn new(num_colors: usize) -> Result<Self> {
        if num_colors == 0 {
            return Err(invalid_parameter(
                "num_colors",
                &num_colors,
                &"palette must have at least one color",
            ));
        }
        if num_colors > 256 {
            return Err(invalid_parameter(
                "num_colors",
                &num_colors,
                &"palette cannot exceed 256 levels",
            ));
        }
        Ok(Self {
            num_colors,
            bucket_width: 256.0 / num_colors as f64,
        })
    }

    /// The palette size this quantizer was built for
    pub const fn num_colors(&self) -> usize {
        self.num_colors
    }

    /// Quantize a single intensity to a palette level in `[0, num_colors)`
    ///
    /// Accepts any numeric intensity: u8 grid cells and f64 masked means both
    /// pass through the same bucketing. Out-of-range or non-finite values
    /// clamp to the nearest level.
    pub fn level<T: ToPrimitive>(&self, intensity: T) -> u8 {
        let v = intensity.to_f64().unwrap_or(0.0).max(0.0);
        let bucket = (v / self.bucket_width).floor() as usize;
        bucket.min(self.num_colors - 1) as u8
    }

    /// Quantize a raster element-wise
    pub fn quantize_raster(&self, raster: &Array2<u8>) -> Array2<u8> {
        raster.mapv(|v| self.level(v))
    }

    /// Reconstruct a display intensity for a level
    ///
    /// Used for debug previews only; reconstruction is not lossless.
    pub fn preview(&self, level: u8) -> u8 {
        (f64::from(level) * self.bucket_width).round().min(255.0) as u8
    }
}
