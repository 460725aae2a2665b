//! Load dataset use case
//!
//! Reads every record file the [`RecordSource`] lists, tags each record
//! with the category derived from its file name, and assembles a
//! [`Dataset`].
//!
//! # Failure model
//!
//! - Access errors (missing directory, unreadable file, a listed file
//!   with no category name) abort the load.
//! - Malformed lines are skipped, logged and kept as
//!   [`LineDiagnostic`]s on the returned dataset.

use crate::ports::progress::{LoadProgressNotifier, NoProgress};
use crate::ports::record_source::{RecordSource, SourceError};
use hvad_domain::{Category, Dataset, LineDiagnostic, QuestionRecord, parse_record_line};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

const BOM: char = '\u{feff}';

/// Errors that can occur while loading a dataset
#[derive(Error, Debug)]
pub enum LoadDatasetError {
    #[error("Access error: {0}")]
    Access(#[from] SourceError),
}

/// Use case for loading a category-partitioned dataset directory
pub struct LoadDatasetUseCase<S: RecordSource + 'static> {
    source: Arc<S>,
}

impl<S: RecordSource + 'static> LoadDatasetUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(&self, dir: &Path) -> Result<Dataset, LoadDatasetError> {
        self.execute_with_progress(dir, &NoProgress)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_progress(
        &self,
        dir: &Path,
        progress: &dyn LoadProgressNotifier,
    ) -> Result<Dataset, LoadDatasetError> {
        let files = self.source.list_files(dir)?;
        info!("Loading {} record files from {}", files.len(), dir.display());
        progress.on_load_start(files.len());

        let mut records = Vec::new();
        let mut diagnostics = Vec::new();
        let mut files_read = 0;

        for path in &files {
            let category = Category::from_path(path)
                .ok_or_else(|| SourceError::InvalidFileName(path.clone()))?;

            let content = self.source.read_file(path)?;
            let source_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());

            let before = (records.len(), diagnostics.len());
            parse_file(
                &content,
                &category,
                &source_name,
                &mut records,
                &mut diagnostics,
            );
            files_read += 1;

            let loaded = records.len() - before.0;
            let skipped = diagnostics.len() - before.1;
            debug!(
                "Loaded {} records ({} skipped) from {}",
                loaded, skipped, source_name
            );
            progress.on_file_loaded(&category, loaded, skipped);
        }

        let dataset = Dataset::new(records, diagnostics, files_read);
        info!(
            "Loaded {} records in {} categories ({} lines skipped)",
            dataset.len(),
            dataset.category_counts().len(),
            dataset.diagnostics().len()
        );
        progress.on_load_complete(&dataset);

        Ok(dataset)
    }
}

/// Parse every non-blank line of one file, appending to the accumulators
fn parse_file(
    content: &str,
    category: &Category,
    source_name: &str,
    records: &mut Vec<QuestionRecord>,
    diagnostics: &mut Vec<LineDiagnostic>,
) {
    let content = content.strip_prefix(BOM).unwrap_or(content);

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_record_line(line, category) {
            Ok(record) => records.push(record),
            Err(e) => {
                let diagnostic = LineDiagnostic::new(source_name, index + 1, e);
                warn!("Skipping malformed record at {}", diagnostic);
                diagnostics.push(diagnostic);
            }
        }
    }
}
