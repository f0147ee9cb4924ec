//! Progress display for config generation
//!
//! Shows a bar over the manifest list using indicatif. Disabled in quiet and
//! dry-run mode, and for single-manifest runs where it would only flicker.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Progress over the manifests of one run; draws nothing when disabled
pub struct Progress {
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Start tracking `total` manifests, or do nothing if `enabled` is false
    pub fn start(enabled: bool, total: u64) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} {msg} [{bar:30.cyan/blue}] {pos}/{len}")
                .expect("Invalid template")
                .progress_chars("█▓▒░"),
        );
        bar.set_message("Generating config");
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    /// Announce the manifest about to be read
    pub fn reading(&self, path: &Path) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("Reading {}", path.display()));
        }
    }

    /// Count one manifest as done
    pub fn done(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Remove the bar from the terminal
    pub fn finish(self) {
        if let Some(bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
