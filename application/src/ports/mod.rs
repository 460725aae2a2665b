//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod dataset_writer;
pub mod progress;
pub mod record_source;
