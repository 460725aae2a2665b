//! Application layer for hvadvilduhelst
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    dataset_writer::DatasetWriter,
    progress::{LoadProgressNotifier, NoProgress},
    record_source::{RecordSource, SourceError},
};
pub use use_cases::export_dataset::{
    ExportDatasetError, ExportDatasetInput, ExportDatasetOutput, ExportDatasetUseCase,
};
pub use use_cases::load_dataset::{LoadDatasetError, LoadDatasetUseCase};
pub use use_cases::probe_dataset::{ProbeDatasetInput, ProbeDatasetOutput, ProbeDatasetUseCase};
