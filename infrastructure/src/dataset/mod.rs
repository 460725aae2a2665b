//! Dataset file access
//!
//! Lists and reads category files from a local directory.

mod local_source;

pub use local_source::{DEFAULT_EXTENSION, LocalRecordSource};
