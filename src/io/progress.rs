//! Catalog batch progress with a rolling window of recent results

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Tracks progress over a batch of catalogs
///
/// One bar counts processed files; below it a fixed number of status lines
/// show the most recent catalogs and their estimates.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    status_lines: Vec<ProgressBar>,
    /// (`filename`, `status`) per catalog, in processing order
    file_states: Vec<(String, String)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STATUS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:.bold} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Catalogs: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            status_lines: Vec::new(),
            file_states: Vec::new(),
        }
    }

    /// Create the batch bar and status lines for `file_count` catalogs
    pub fn initialize(&mut self, file_count: usize) {
        let batch_bar = ProgressBar::new(file_count as u64);
        batch_bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(self.multi_progress.add(batch_bar));

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let line = ProgressBar::new(0);
            line.set_style(STATUS_STYLE.clone());
            self.status_lines.push(self.multi_progress.add(line));
        }
    }

    /// Mark a catalog as being processed
    pub fn start_file(&mut self, index: usize, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.set_state(index, display_name, "estimating…".to_string());
    }

    /// Mark a catalog as finished with a short status such as the estimate summary
    pub fn complete_file(&mut self, index: usize, status: &str) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.file_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = status.to_string();
        }
        self.update_lines();
    }

    /// Number of catalogs marked complete
    pub fn completed(&self) -> u64 {
        self.batch_bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All catalogs processed");
        }
        let _ = self.multi_progress.clear();
    }

    fn set_state(&mut self, index: usize, name: String, status: String) {
        if index >= self.file_states.len() {
            self.file_states
                .resize(index + 1, (String::new(), String::new()));
        }
        if let Some(state) = self.file_states.get_mut(index) {
            *state = (name, status);
        }
        self.update_lines();
    }

    fn update_lines(&self) {
        let active: Vec<&(String, String)> = self
            .file_states
            .iter()
            .filter(|(name, _)| !name.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (line_idx, line) in self.status_lines.iter().enumerate() {
            match visible.get(line_idx) {
                Some((name, status)) => {
                    line.set_prefix(name.clone());
                    line.set_message(status.clone());
                }
                None => {
                    line.set_prefix(String::new());
                    line.set_message(String::new());
                }
            }
        }
    }
}
