//! Dataset export adapters

mod jsonl_writer;

pub use jsonl_writer::JsonlDatasetWriter;
