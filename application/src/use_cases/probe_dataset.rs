//! Probe dataset use case
//!
//! Loads a dataset and builds a [`ProbeReport`] over it.

use super::load_dataset::{LoadDatasetError, LoadDatasetUseCase};
use crate::ports::progress::{LoadProgressNotifier, NoProgress};
use crate::ports::record_source::RecordSource;
use hvad_domain::{Dataset, ProbeReport, ProbeSettings};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Input for the ProbeDataset use case
#[derive(Debug, Clone)]
pub struct ProbeDatasetInput {
    pub dataset_dir: PathBuf,
    pub settings: ProbeSettings,
}

impl ProbeDatasetInput {
    pub fn new(dataset_dir: impl Into<PathBuf>) -> Self {
        Self {
            dataset_dir: dataset_dir.into(),
            settings: ProbeSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ProbeSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// Output from the ProbeDataset use case
#[derive(Debug, Clone)]
pub struct ProbeDatasetOutput {
    pub dataset: Dataset,
    pub report: ProbeReport,
}

/// Use case for inspecting a dataset directory
pub struct ProbeDatasetUseCase<S: RecordSource + 'static> {
    loader: LoadDatasetUseCase<S>,
}

impl<S: RecordSource + 'static> ProbeDatasetUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            loader: LoadDatasetUseCase::new(source),
        }
    }

    pub fn execute(&self, input: ProbeDatasetInput) -> Result<ProbeDatasetOutput, LoadDatasetError> {
        self.execute_with_progress(input, &NoProgress)
    }

    pub fn execute_with_progress(
        &self,
        input: ProbeDatasetInput,
        progress: &dyn LoadProgressNotifier,
    ) -> Result<ProbeDatasetOutput, LoadDatasetError> {
        let dataset = self
            .loader
            .execute_with_progress(&input.dataset_dir, progress)?;

        let report = ProbeReport::build(&dataset, &input.settings);
        info!(
            "Probe found {} quality issues across {} records",
            report.quality.total(),
            dataset.len()
        );

        Ok(ProbeDatasetOutput { dataset, report })
    }
}
