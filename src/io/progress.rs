//! Tier progress display for shape mosaic runs

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TIER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} tiers"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display over the mosaic tier loop
///
/// One bar advances per completed tier; the message shows the tier currently
/// being sampled. The caller decides whether to construct one at all (the
/// quiet switch).
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar spanning `tier_count` tiers
    pub fn new(tier_count: usize) -> Self {
        let bar = ProgressBar::new(tier_count as u64);
        bar.set_style(TIER_STYLE.clone());
        Self { bar }
    }

    /// Announce the tier about to be sampled
    pub fn start_pass(&self, diameter_px: usize, planned_samples: usize) {
        self.bar
            .set_message(format!("{diameter_px}px x {planned_samples}"));
    }

    /// Mark the current tier as done
    pub fn complete_pass(&self) {
        self.bar.inc(1);
    }

    /// Clear the display after the last tier
    pub fn finish(&self) {
        self.bar.finish_with_message("all tiers sampled");
    }
}
