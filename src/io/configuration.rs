//! Runtime configuration defaults and physical unit constants

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default palette size for quantization
pub const DEFAULT_NUM_COLORS: usize = 6;

/// Default number of diameter tiers for the shapes algorithm
pub const DEFAULT_ITERATIONS: usize = 4;

// Physical units, expressed in points (1 pt = 1/72 inch)
/// Points per inch
pub const POINTS_PER_INCH: f64 = 72.0;

/// Points per centimeter
pub const POINTS_PER_CM: f64 = 72.0 / 2.54;

// Paper dimensions in points, portrait orientation
/// US Letter paper (8.5 x 11 in)
pub const LETTER: (f64, f64) = (612.0, 792.0);

/// US Legal paper (8.5 x 14 in)
pub const LEGAL: (f64, f64) = (612.0, 1008.0);

/// US Tabloid paper (11 x 17 in)
pub const TABLOID: (f64, f64) = (792.0, 1224.0);

/// ISO A3 paper
pub const A3: (f64, f64) = (842.0, 1191.0);

/// ISO A4 paper
pub const A4: (f64, f64) = (595.0, 842.0);

/// ISO A5 paper
pub const A5: (f64, f64) = (420.0, 595.0);

// Progress bar display settings
/// Width of the tier progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
