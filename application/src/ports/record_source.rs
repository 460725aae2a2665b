//! Record source port
//!
//! Defines how the application layer reaches category record files.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Access errors. These abort a load; nothing is retried.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Dataset directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Cannot read directory {}: {source}", .path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No category name in file name: {}", .0.display())]
    InvalidFileName(PathBuf),

    #[error("Cannot read file {}: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    /// The path the failed access was about
    pub fn path(&self) -> &Path {
        match self {
            SourceError::DirectoryNotFound(path)
            | SourceError::NotADirectory(path)
            | SourceError::InvalidFileName(path) => path,
            SourceError::DirectoryUnreadable { path, .. }
            | SourceError::FileUnreadable { path, .. } => path,
        }
    }
}

/// Source of category record files
///
/// Implementations live in the infrastructure layer. Each listed file
/// is one category; its lines are parsed by the load use case.
pub trait RecordSource: Send + Sync {
    /// Record files in `dir`, in the order they should be loaded
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, SourceError>;

    /// Full text content of one record file
    fn read_file(&self, path: &Path) -> Result<String, SourceError>;
}
