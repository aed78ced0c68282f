//! Stochastic multi-scale shape sampling

/// Shape mosaic generation across diameter tiers
pub mod mosaic;
/// Shape kind vocabulary and random selection
pub mod shapes;

pub use mosaic::{MosaicConfig, MosaicPass, ShapeMosaic, ShapeSample};
pub use shapes::ShapeKind;
