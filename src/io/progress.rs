//! Progress display for batch design analysis

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

/// Tracks how many design files of a batch have been analyzed
///
/// Single-file runs stay silent; batches get one bar counting files.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    file_count: usize,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            file_count: 0,
            completed: 0,
        }
    }

    /// Prepare the display for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        self.finish();
        self.file_count = file_count;
        self.completed = 0;

        if file_count > 1 {
            let bar = ProgressBar::new(file_count as u64);
            bar.set_style(Self::batch_style());
            self.bar = Some(bar);
        }
    }

    /// Mark one file as analyzed
    pub fn complete_file(&mut self, path: &Path) {
        self.completed = (self.completed + 1).min(self.file_count);

        if let Some(bar) = &self.bar {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            bar.set_message(name);
            bar.inc(1);
        }
    }

    /// Close the display
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }

    /// Number of files expected in this batch
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Number of files marked complete
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Whether a progress bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    fn batch_style() -> ProgressStyle {
        let template = format!(
            "[{{elapsed_precise}}] Designs: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        );
        ProgressStyle::default_bar()
            .template(&template)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
    }
}
