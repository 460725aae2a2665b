//! Export dataset use case
//!
//! Loads a dataset directory and writes every record, category included,
//! to a single destination through a [`DatasetWriter`].

use super::load_dataset::{LoadDatasetError, LoadDatasetUseCase};
use crate::ports::dataset_writer::DatasetWriter;
use crate::ports::progress::{LoadProgressNotifier, NoProgress};
use crate::ports::record_source::RecordSource;
use hvad_domain::Dataset;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during export
#[derive(Error, Debug)]
pub enum ExportDatasetError {
    /// The destination exists and `force` was not set.
    #[error("Output file already exists at {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error(transparent)]
    Load(#[from] LoadDatasetError),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Input for the ExportDataset use case
#[derive(Debug, Clone)]
pub struct ExportDatasetInput {
    pub dataset_dir: PathBuf,
    pub output: PathBuf,
    /// Overwrite an existing output file
    pub force: bool,
}

impl ExportDatasetInput {
    pub fn new(dataset_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            dataset_dir: dataset_dir.into(),
            output: output.into(),
            force: false,
        }
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Output from the ExportDataset use case
#[derive(Debug, Clone)]
pub struct ExportDatasetOutput {
    pub path: PathBuf,
    pub records_written: usize,
    pub dataset: Dataset,
}

/// Use case for writing the unified dataset to one file
pub struct ExportDatasetUseCase<S: RecordSource + 'static, W: DatasetWriter + 'static> {
    loader: LoadDatasetUseCase<S>,
    writer: Arc<W>,
}

impl<S: RecordSource + 'static, W: DatasetWriter + 'static> ExportDatasetUseCase<S, W> {
    pub fn new(source: Arc<S>, writer: Arc<W>) -> Self {
        Self {
            loader: LoadDatasetUseCase::new(source),
            writer,
        }
    }

    pub fn execute(
        &self,
        input: ExportDatasetInput,
    ) -> Result<ExportDatasetOutput, ExportDatasetError> {
        self.execute_with_progress(input, &NoProgress)
    }

    pub fn execute_with_progress(
        &self,
        input: ExportDatasetInput,
        progress: &dyn LoadProgressNotifier,
    ) -> Result<ExportDatasetOutput, ExportDatasetError> {
        if !input.force && self.writer.exists(&input.output) {
            return Err(ExportDatasetError::AlreadyExists(input.output));
        }

        let dataset = self
            .loader
            .execute_with_progress(&input.dataset_dir, progress)?;

        let records_written = self
            .writer
            .write_records(&input.output, dataset.records())
            .map_err(|source| ExportDatasetError::Write {
                path: input.output.clone(),
                source,
            })?;

        info!(
            "Exported {} records to {}",
            records_written,
            input.output.display()
        );

        Ok(ExportDatasetOutput {
            path: input.output,
            records_written,
            dataset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{InMemorySource, InMemoryWriter};

    fn source() -> InMemorySource {
        InMemorySource::new().with_file(
            "mad.jsonl",
            concat!(
                r#"{"question": "Ville du helst spise is eller kage?", "answer_A": "Is", "answer_B": "Kage"}"#,
                "\n",
                r#"{"question": "Ville du helst drikke kaffe eller te?", "answer_A": "Kaffe"}"#,
            ),
        )
    }

    #[test]
    fn test_export_writes_valid_records() {
        let writer = Arc::new(InMemoryWriter::default());
        let use_case = ExportDatasetUseCase::new(Arc::new(source()), Arc::clone(&writer));

        let output = use_case
            .execute(ExportDatasetInput::new("data", "out/hvadvilduhelst.jsonl"))
            .unwrap();

        assert_eq!(output.records_written, 1);
        assert_eq!(output.dataset.diagnostics().len(), 1);
        let written = writer.written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, PathBuf::from("out/hvadvilduhelst.jsonl"));
        assert_eq!(written[0].1[0].category().as_str(), "mad");
    }

    #[test]
    fn test_export_refuses_to_overwrite() {
        let writer = Arc::new(InMemoryWriter {
            existing: vec![PathBuf::from("out.jsonl")],
            ..Default::default()
        });
        let use_case = ExportDatasetUseCase::new(Arc::new(source()), Arc::clone(&writer));

        let result = use_case.execute(ExportDatasetInput::new("data", "out.jsonl"));
        assert!(matches!(result, Err(ExportDatasetError::AlreadyExists(_))));
        assert!(writer.written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_export_force_overwrites() {
        let writer = Arc::new(InMemoryWriter {
            existing: vec![PathBuf::from("out.jsonl")],
            ..Default::default()
        });
        let use_case = ExportDatasetUseCase::new(Arc::new(source()), Arc::clone(&writer));

        let output = use_case
            .execute(ExportDatasetInput::new("data", "out.jsonl").with_force(true))
            .unwrap();
        assert_eq!(output.records_written, 1);
    }

    #[test]
    fn test_export_propagates_load_errors() {
        let writer = Arc::new(InMemoryWriter::default());
        let use_case = ExportDatasetUseCase::new(Arc::new(InMemorySource::missing()), writer);

        let result = use_case.execute(ExportDatasetInput::new("nowhere", "out.jsonl"));
        assert!(matches!(result, Err(ExportDatasetError::Load(_))));
    }
}
