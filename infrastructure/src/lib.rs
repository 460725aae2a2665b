//! Infrastructure layer for hvadvilduhelst
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod dataset;
pub mod export;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDatasetConfig, FileOutputConfig,
    FileProbeConfig,
};
pub use dataset::{DEFAULT_EXTENSION, LocalRecordSource};
pub use export::JsonlDatasetWriter;
