//! Orientation-aware page dimension calculations
//!
//! Maps raster pixel space onto a physical sheet of paper: which way the page
//! is turned, how much of it is printable after margins, and how pixel counts
//! translate into grid blocks and point scales.

use crate::io::error::{MosaicError, Result, invalid_parameter};

/// Page orientation, derived once per run from the raster's aspect ratio
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Raster is at least as tall as it is wide; page used as given
    Portrait,
    /// Raster is wider than tall; page width and height are swapped
    Landscape,
}

impl Orientation {
    /// Derive the orientation from raster dimensions
    ///
    /// A square raster counts as portrait.
    pub const fn from_raster_dims(rows: usize, cols: usize) -> Self {
        if rows >= cols {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }
}

/// Physical page dimensions and margin, in points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSpec {
    /// Page width in points
    pub width_pt: f64,
    /// Page height in points
    pub height_pt: f64,
    /// Uniform margin applied to all four sides, in points
    pub margin_pt: f64,
}

impl PageSpec {
    /// Create a validated page specification
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is non-positive, the
    /// margin is negative, or the margin would consume the whole page
    /// (`margin >= min(width, height) / 2` leaves no printable area).
    pub fn new(width_pt: f64, height_pt: f64, margin_pt: f64) -> Result<Self> {
        if !(width_pt > 0.0 && height_pt > 0.0) {
            return Err(invalid_parameter(
                "page_size",
                &format!("{width_pt}x{height_pt}"),
                &"page dimensions must be positive",
            ));
        }
        if margin_pt < 0.0 {
            return Err(invalid_parameter(
                "margin",
                &margin_pt,
                &"margin must not be negative",
            ));
        }
        if margin_pt >= width_pt.min(height_pt) / 2.0 {
            return Err(invalid_parameter(
                "margin",
                &margin_pt,
                &"margin leaves no printable area on the page",
            ));
        }
        Ok(Self {
            width_pt,
            height_pt,
            margin_pt,
        })
    }
}

/// Printable page region after subtracting margins on all sides
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrintArea {
    /// Printable width in points
    pub width_pt: f64,
    /// Printable height in points
    pub height_pt: f64,
}

/// Orientation-specific page calculations
///
/// Carries the validated page spec and the orientation selected from the
/// raster, so every downstream measurement agrees on which page axis maps to
/// which pixel axis.
#[derive(Clone, Copy, Debug)]
pub struct PageGeometry {
    page: PageSpec,
    orientation: Orientation,
}

impl PageGeometry {
    /// Pair a page spec with the orientation derived from the raster
    pub const fn new(page: PageSpec, orientation: Orientation) -> Self {
        Self { page, orientation }
    }

    /// The orientation this geometry was built for
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The uniform page margin in points
    pub const fn margin_pt(&self) -> f64 {
        self.page.margin_pt
    }

    /// Page dimensions with the landscape axis swap applied
    ///
    /// The longer page axis is aligned with the longer raster axis, so a
    /// landscape raster uses the page turned on its side.
    pub const fn document_dims(&self) -> (f64, f64) {
        match self.orientation {
            Orientation::Portrait => (self.page.width_pt, self.page.height_pt),
            Orientation::Landscape => (self.page.height_pt, self.page.width_pt),
        }
    }

    /// Printable area: axis-adjusted page dimensions minus margins
    pub const fn print_area(&self) -> PrintArea {
        let (width_pt, height_pt) = self.document_dims();
        PrintArea {
            width_pt: width_pt - 2.0 * self.page.margin_pt,
            height_pt: height_pt - 2.0 * self.page.margin_pt,
        }
    }

    /// How many squares of the given size fit on the printable area
    ///
    /// Returns `(rows, cols)` as whole squares; partial squares at the edges
    /// do not count.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `square_size_pt` is non-positive or too
    /// large for even a single square to fit.
    pub fn grid_size(&self, square_size_pt: f64) -> Result<(usize, usize)> {
        if square_size_pt <= 0.0 {
            return Err(invalid_parameter(
                "square_size",
                &square_size_pt,
                &"square size must be positive",
            ));
        }
        let area = self.print_area();
        let cols = (area.width_pt / square_size_pt).floor() as usize;
        let rows = (area.height_pt / square_size_pt).floor() as usize;
        if rows == 0 || cols == 0 {
            return Err(invalid_parameter(
                "square_size",
                &square_size_pt,
                &"square size exceeds the printable area",
            ));
        }
        Ok((rows, cols))
    }

    /// Pixels per grid block for the downscale algorithm
    ///
    /// The margin-constrained axis determines the block size: columns for a
    /// portrait raster, rows for a landscape one. The other axis yields
    /// whatever cell count that same block size produces.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid cannot be sized (see
    /// [`Self::grid_size`]) or the raster has fewer pixels than the grid has
    /// squares along the dominant axis.
    pub fn block_size(&self, raster_dims: (usize, usize), square_size_pt: f64) -> Result<usize> {
        let (raster_rows, raster_cols) = raster_dims;
        let (grid_rows, grid_cols) = self.grid_size(square_size_pt)?;
        let block = match self.orientation {
            Orientation::Portrait => raster_cols / grid_cols,
            Orientation::Landscape => raster_rows / grid_rows,
        };
        if block == 0 {
            return Err(invalid_parameter(
                "square_size",
                &square_size_pt,
                &format!("raster ({raster_rows}x{raster_cols} px) is smaller than the requested grid"),
            ));
        }
        Ok(block)
    }

    /// Uniform pixel-to-point scale factor for the shapes algorithm
    ///
    /// A single scalar covers both axes: the shorter print axis divided by
    /// the raster's longer side, so the scaled image fits the print area at
    /// any aspect ratio. No independent x/y scaling is applied.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSourceData` if the raster has a zero dimension.
    pub fn points_per_pixel(&self, raster_dims: (usize, usize)) -> Result<f64> {
        let (raster_rows, raster_cols) = raster_dims;
        if raster_rows == 0 || raster_cols == 0 {
            return Err(MosaicError::InvalidSourceData {
                reason: format!("raster has a zero dimension ({raster_rows}x{raster_cols})"),
            });
        }
        let area = self.print_area();
        // Portrait rasters are row-dominant, landscape rasters col-dominant
        let scale = match self.orientation {
            Orientation::Portrait => area.width_pt / raster_rows as f64,
            Orientation::Landscape => area.height_pt / raster_cols as f64,
        };
        Ok(scale)
    }
}
