//! Debug snapshots of intermediate rasters

use crate::io::error::Result;
use crate::io::image::save_raster;
use ndarray::Array2;
use std::path::PathBuf;

/// Sink for named raster snapshots produced mid-run
///
/// The core routes its intermediate artifacts (grayscale input, downsampled
/// grid, quantized preview) through this seam; a no-op sink is fully
/// equivalent to disabling debug output.
pub trait DebugSink {
    /// Record a snapshot under the given name
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be persisted.
    fn record(&self, name: &str, raster: &Array2<u8>) -> Result<()>;
}

/// Writes each snapshot as `<dir>/<name>.png`
#[derive(Clone, Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink writing into the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl DebugSink for DirectorySink {
    fn record(&self, name: &str, raster: &Array2<u8>) -> Result<()> {
        save_raster(raster, &self.dir.join(format!("{name}.png")))
    }
}

/// Discards every snapshot
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DebugSink for NullSink {
    fn record(&self, _name: &str, _raster: &Array2<u8>) -> Result<()> {
        Ok(())
    }
}
