//! Progress reporting for dataset loads

use colored::Colorize;
use hvad_application::LoadProgressNotifier;
use hvad_domain::{Category, Dataset};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports load progress with a progress bar over the record files
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn load_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadProgressNotifier for ProgressReporter {
    fn on_load_start(&self, total_files: usize) {
        let pb = ProgressBar::new(total_files as u64);
        pb.set_style(Self::load_style());
        pb.set_prefix("Loading");
        pb.set_message("Starting...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_file_loaded(&self, category: &Category, records: usize, skipped: usize) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            let status = if skipped == 0 {
                format!("{} {} ({})", "v".green(), category, records)
            } else {
                format!(
                    "{} {} ({}, {} skipped)",
                    "!".yellow(),
                    category,
                    records,
                    skipped
                )
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_load_complete(&self, dataset: &Dataset) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!("{} records loaded", dataset.len()).green().to_string());
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl LoadProgressNotifier for SimpleProgress {
    fn on_load_start(&self, total_files: usize) {
        eprintln!("{} {} ({} files)", "->".cyan(), "Loading".bold(), total_files);
    }

    fn on_file_loaded(&self, category: &Category, records: usize, skipped: usize) {
        if skipped == 0 {
            eprintln!("  {} {} ({})", "v".green(), category, records);
        } else {
            eprintln!(
                "  {} {} ({}, {} skipped)",
                "!".yellow(),
                category,
                records,
                skipped
            );
        }
    }

    fn on_load_complete(&self, _dataset: &Dataset) {
        eprintln!();
    }
}
