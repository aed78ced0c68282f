//! Stochastic multi-scale shape covering
//!
//! Runs a sequence of halving-diameter passes over the raster. Each pass
//! places enough randomly positioned shapes to roughly cover the image area
//! at that scale (bounding-box heuristic, so overlap and gaps are both
//! expected) and extracts one quantized color per shape through a circular
//! averaging mask. Passes are independent; their order only controls visual
//! layering, largest diameter first.

use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::raster::{Quantizer, circle_kernel, masked_mean};
use crate::sampler::shapes::ShapeKind;
use ndarray::{Array2, s};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Parameters for a shape mosaic run
#[derive(Clone, Copy, Debug)]
pub struct MosaicConfig {
    /// Number of diameter tiers to run
    pub iterations: usize,
    /// Palette size for color extraction
    pub num_colors: usize,
    /// Seed for the run's random number generator
    pub seed: u64,
}

/// One placed shape with its extracted palette level
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShapeSample {
    /// Shape geometry kind
    pub kind: ShapeKind,
    /// Center in pixel coordinates, `[row, col]`
    pub center_px: [usize; 2],
    /// Radius in pixels (half the tier diameter)
    pub radius_px: usize,
    /// Quantized palette level
    pub level: u8,
}

/// One resolution tier of the covering
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MosaicPass {
    /// Shape bounding-box diameter for this tier, in pixels
    pub diameter_px: usize,
    /// Samples in generation order
    pub samples: Vec<ShapeSample>,
}

impl MosaicPass {
    /// Whether this tier produced no samples
    pub const fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Multi-scale shape sampler over a borrowed grayscale raster
///
/// The generator is the only mutable state; a fixed seed reproduces the
/// output sequence exactly. Samples never see each other's colors.
#[derive(Debug)]
pub struct ShapeMosaic<'a> {
    raster: &'a Array2<u8>,
    quantizer: Quantizer,
    diameters: Vec<usize>,
    rng: StdRng,
}

impl<'a> ShapeMosaic<'a> {
    /// Create a sampler for the raster with the given configuration
    ///
    /// Tier diameters are `shorter_side / 2^i` for `i = 1..=iterations`.
    /// The configured iteration count is the only stop criterion; tiers
    /// whose diameter reaches zero simply come out empty.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` for an empty raster and
    /// `InvalidParameter` for zero `iterations` or an invalid palette size.
    pub fn new(raster: &'a Array2<u8>, config: &MosaicConfig) -> Result<Self> {
        let (rows, cols) = raster.dim();
        if rows == 0 || cols == 0 {
            return Err(MosaicError::InvalidSourceData {
                reason: format!("raster has a zero dimension ({rows}x{cols})"),
            });
        }
        if config.iterations == 0 {
            return Err(invalid_parameter(
                "iterations",
                &config.iterations,
                &"at least one tier is required",
            ));
        }
        let quantizer = Quantizer::new(config.num_colors)?;

        let shorter_side = rows.min(cols);
        let diameters = (1..=config.iterations)
            .map(|i| {
                u32::try_from(i)
                    .ok()
                    .and_then(|shift| shorter_side.checked_shr(shift))
                    .unwrap_or(0)
            })
            .collect();

        Ok(Self {
            raster,
            quantizer,
            diameters,
            rng: StdRng::seed_from_u64(config.seed),
        })
    }

    /// Tier diameters in run order (strictly decreasing until zero)
    pub fn diameters(&self) -> &[usize] {
        &self.diameters
    }

    /// Whether a tier of this diameter cannot place any sample
    pub fn is_degenerate(&self, diameter_px: usize) -> bool {
        let (rows, cols) = self.raster.dim();
        diameter_px == 0 || diameter_px > rows.min(cols)
    }

    /// How many samples a tier of this diameter will place
    ///
    /// `raster_area / diameter^2` — enough bounding boxes of this size to
    /// roughly cover the image area. Zero for degenerate diameters.
    pub fn planned_samples(&self, diameter_px: usize) -> usize {
        if self.is_degenerate(diameter_px) {
            return 0;
        }
        let (rows, cols) = self.raster.dim();
        (rows * cols) / (diameter_px * diameter_px)
    }

    /// Run one tier, placing `raster_area / diameter^2` samples
    ///
    /// Placement keeps each sample's full bounding box inside the raster.
    /// The draw order per sample is fixed (row, col, shape kind), which is
    /// part of the determinism contract. A degenerate diameter yields an
    /// empty pass, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if kernel construction or application fails,
    /// which cannot happen for a non-degenerate diameter.
    pub fn run_pass(&mut self, diameter_px: usize) -> Result<MosaicPass> {
        if self.is_degenerate(diameter_px) {
            return Ok(MosaicPass {
                diameter_px,
                samples: Vec::new(),
            });
        }

        let (rows, cols) = self.raster.dim();
        let kernel = circle_kernel(diameter_px)?;
        let num_samples = (rows * cols) / (diameter_px * diameter_px);
        let radius_px = diameter_px / 2;

        let mut samples = Vec::with_capacity(num_samples);
        for _ in 0..num_samples {
            let row = self.rng.random_range(0..=rows - diameter_px);
            let col = self.rng.random_range(0..=cols - diameter_px);
            let kind = ShapeKind::draw(&mut self.rng);

            let window = self
                .raster
                .slice(s![row..row + diameter_px, col..col + diameter_px]);
            let mean = masked_mean(window, &kernel)?;

            samples.push(ShapeSample {
                kind,
                center_px: [row + radius_px, col + radius_px],
                radius_px,
                level: self.quantizer.level(mean),
            });
        }

        Ok(MosaicPass {
            diameter_px,
            samples,
        })
    }

    /// Run every tier in order and collect the passes
    ///
    /// # Errors
    ///
    /// Propagates the first `run_pass` failure, if any.
    pub fn generate(&mut self) -> Result<Vec<MosaicPass>> {
        let diameters = self.diameters.clone();
        diameters.into_iter().map(|d| self.run_pass(d)).collect()
    }
}
