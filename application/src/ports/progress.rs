//! Progress notification port
//!
//! Defines the interface for reporting progress while a dataset loads.

use hvad_domain::{Category, Dataset};

/// Callback for progress updates during a load
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain log lines, ...).
pub trait LoadProgressNotifier: Send + Sync {
    /// Called once the file list is known
    fn on_load_start(&self, total_files: usize);

    /// Called after each record file has been parsed
    fn on_file_loaded(&self, category: &Category, records: usize, skipped: usize);

    /// Called when the whole dataset has been assembled
    fn on_load_complete(&self, _dataset: &Dataset) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl LoadProgressNotifier for NoProgress {
    fn on_load_start(&self, _total_files: usize) {}
    fn on_file_loaded(&self, _category: &Category, _records: usize, _skipped: usize) {}
}
