//! Input/output operations and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Runtime defaults and physical unit constants
pub mod configuration;
/// Debug raster snapshot sinks
pub mod debug;
/// Error types
pub mod error;
/// Raster loading and PNG export
pub mod image;
/// Tier progress display
pub mod progress;
