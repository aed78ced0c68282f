//! Page geometry and coordinate mapping
//!
//! This module contains the physical-layout functionality:
//! - Orientation selection and print area calculation
//! - Grid and block sizing against paper dimensions
//! - Pixel-to-point conversion with the page-space y flip

/// Orientation, print area, and grid sizing calculations
pub mod page;
/// Pixel-space to page-space conversion
pub mod transform;

pub use page::{Orientation, PageGeometry, PageSpec, PrintArea};
pub use transform::PointMapper;
