//! Paint-by-numbers page generation from raster photographs
//!
//! Converts a photograph into a vector art page of flat-colored regions
//! drawn from a small quantized palette, scaled to a physical sheet of
//! paper. Two algorithms are provided: a block-averaging grid and a
//! stochastic multi-scale covering of overlapping shapes.

#![deny(unsafe_code)]

/// Page geometry and pixel-to-point coordinate mapping
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Raster reductions: block averaging, quantization, circular masks
pub mod raster;
/// Drawing commands and the PostScript document writer
pub mod render;
/// Stochastic multi-scale shape sampling
pub mod sampler;

pub use io::error::{MosaicError, Result};
