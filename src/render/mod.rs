//! Drawing commands and the PostScript document writer

/// Drawing command types and converters from algorithm output
pub mod command;
/// Palette level to gray mapping
pub mod palette;
/// PostScript emission
pub mod postscript;

pub use command::{DrawCommand, grid_commands, shape_commands};
pub use postscript::{DocumentSpec, write_document};
