//! Raster loading and PNG export

use crate::io::error::{MosaicError, Result};
use ndarray::Array2;
use std::path::Path;

/// Load an image file and convert it to a grayscale raster
///
/// Any format the `image` crate recognizes is accepted; color sources are
/// converted to 8-bit luma before the core ever sees them.
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be read or decoded, and
/// `InvalidSourceData` if the decoded image is empty.
pub fn load_grayscale(path: &Path) -> Result<Array2<u8>> {
    let img = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let gray = img.to_luma8();
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return Err(MosaicError::InvalidSourceData {
            reason: format!("image '{}' has no pixels", path.display()),
        });
    }
    Array2::from_shape_vec((height as usize, width as usize), gray.into_raw()).map_err(|e| {
        MosaicError::InvalidSourceData {
            reason: e.to_string(),
        }
    })
}

/// Save a raster as a grayscale PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns `FileSystem` if the parent directory cannot be created,
/// `ImageExport` if encoding or writing fails, and `InvalidSourceData` for
/// rasters too large to describe as an image.
pub fn save_raster(raster: &Array2<u8>, path: &Path) -> Result<()> {
    let (rows, cols) = raster.dim();
    let data: Vec<u8> = raster.iter().copied().collect();
    let img = image::GrayImage::from_raw(cols as u32, rows as u32, data).ok_or_else(|| {
        MosaicError::InvalidSourceData {
            reason: format!("raster dimensions {rows}x{cols} overflow image limits"),
        }
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(path).map_err(|e| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
