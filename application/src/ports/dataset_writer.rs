//! Dataset writer port
//!
//! Destination for a unified, category-tagged export of the dataset.

use hvad_domain::QuestionRecord;
use std::io;
use std::path::Path;

/// Writes records to an export destination.
///
/// Implementations live in the infrastructure layer (e.g. one JSON
/// object per line).
pub trait DatasetWriter: Send + Sync {
    /// Whether something already exists at `dest`
    fn exists(&self, dest: &Path) -> bool;

    /// Write every record to `dest`, replacing any existing content.
    ///
    /// Returns the number of records written.
    fn write_records(&self, dest: &Path, records: &[QuestionRecord]) -> io::Result<usize>;
}
