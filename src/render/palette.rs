//! Palette level to output color mapping

/// Gray value in `[0, 1]` for a palette level
///
/// Uses the bucket-floor reconstruction, so level 0 is black and the top
/// level of a full 256-color palette is near white. A zero palette size maps
/// everything to black rather than dividing by zero.
pub fn gray_for_level(level: u8, num_colors: usize) -> f64 {
    if num_colors == 0 {
        return 0.0;
    }
    let bucket_width = 256.0 / num_colors as f64;
    (f64::from(level) * bucket_width / 255.0).min(1.0)
}
