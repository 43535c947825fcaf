//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_TICK_MS};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Figures: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch decomposition runs
///
/// Small batches get one spinner per figure; larger batches collapse to
/// a single counter bar to avoid terminal spam. Rectangle counts are not
/// known up front, so the per-figure bars are spinners with a running
/// count in the message rather than fixed-length bars.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    file_names: Vec<String>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_target(MultiProgress::new())
    }

    /// Create a progress manager that draws nothing
    ///
    /// Used by headless runs and tests where terminal output is unwanted.
    pub fn hidden() -> Self {
        Self::with_target(MultiProgress::with_draw_target(
            ProgressDrawTarget::hidden(),
        ))
    }

    const fn with_target(multi_progress: MultiProgress) -> Self {
        Self {
            multi_progress,
            batch_bar: None,
            file_bars: Vec::new(),
            file_names: Vec::new(),
        }
    }

    /// Initialize progress display for a batch of figures
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        } else {
            for _ in 0..file_count {
                let pb = ProgressBar::new_spinner();
                pb.set_style(FILE_STYLE.clone());
                self.file_bars.push(self.multi_progress.add(pb));
            }
        }
    }

    /// Check whether the display collapsed to a single batch bar
    pub const fn is_batched(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Begin displaying progress for one figure
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path.file_name().map_or_else(
            || path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );

        if self.file_names.len() <= index {
            self.file_names.resize(index + 1, String::new());
        }
        if let Some(slot) = self.file_names.get_mut(index) {
            *slot = display_name;
        }

        if let Some(bar) = self.file_bars.get(index) {
            bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
            let name = self.file_names.get(index).map_or("", String::as_str);
            bar.set_message(format!("{name}: scanning"));
        }
    }

    /// Update the rectangle count shown for one figure
    pub fn update_rectangles(&self, index: usize, count: usize) {
        if let Some(bar) = self.file_bars.get(index) {
            let name = self.file_names.get(index).map_or("", String::as_str);
            bar.set_message(format!("{name}: {count} rectangles"));
        }
    }

    /// Mark one figure as finished
    pub fn complete_file(&self, index: usize, count: usize) {
        if let Some(bar) = self.file_bars.get(index) {
            let name = self.file_names.get(index).map_or("", String::as_str);
            bar.finish_with_message(format!("{name}: {count} rectangles"));
        }
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
        }
    }

    /// Finish the batch display
    pub fn finish(&self) {
        if let Some(ref bar) = self.batch_bar {
            bar.finish();
        }
    }
}
