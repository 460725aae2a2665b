//! Local file system record source
//!
//! This module provides the [`LocalRecordSource`] implementation of
//! [`RecordSource`] that lists and reads category files from a directory.
//!
//! # File Selection
//!
//! A directory entry is treated as a category file when it is:
//!
//! 1. a regular file (subdirectories are not descended),
//! 2. not hidden (name does not start with `.`),
//! 3. carrying the configured extension (default `jsonl`, case-insensitive),
//! 4. named with a UTF-8, non-blank stem that can serve as a category.
//!
//! Files are returned sorted by file name so repeated loads see the
//! same order regardless of what the file system reports.

use hvad_application::{RecordSource, SourceError};
use hvad_domain::Category;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default extension of record files
pub const DEFAULT_EXTENSION: &str = "jsonl";

/// Record source that reads from the local file system.
///
/// `LocalRecordSource` is `Send + Sync` and holds no open handles
/// between calls; every read opens and closes its file.
///
/// # Examples
///
/// ```
/// use hvad_infrastructure::LocalRecordSource;
///
/// let source = LocalRecordSource::new();
/// assert_eq!(source.extension(), "jsonl");
/// ```
#[derive(Debug, Clone)]
pub struct LocalRecordSource {
    extension: String,
}

impl Default for LocalRecordSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalRecordSource {
    /// Creates a source for `*.jsonl` record files.
    pub fn new() -> Self {
        Self::with_extension(DEFAULT_EXTENSION)
    }

    /// Creates a source for record files with the given extension.
    ///
    /// A leading dot is ignored, so `".jsonl"` and `"jsonl"` are the same.
    pub fn with_extension(extension: impl AsRef<str>) -> Self {
        Self {
            extension: extension
                .as_ref()
                .trim()
                .trim_start_matches('.')
                .to_lowercase(),
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Whether a directory entry path names a record file
    fn is_record_file(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        if name.starts_with('.') {
            return false;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(&self.extension))
    }
}

impl RecordSource for LocalRecordSource {
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
        let unreadable = |source: io::Error| SourceError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(dir).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SourceError::DirectoryNotFound(dir.to_path_buf()),
            _ => unreadable(e),
        })?;
        if !metadata.is_dir() {
            return Err(SourceError::NotADirectory(dir.to_path_buf()));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(unreadable)? {
            let path = entry.map_err(unreadable)?.path();

            if !path.is_file() {
                debug!("Skipping non-file entry: {:?}", path);
                continue;
            }
            if !self.is_record_file(&path) {
                debug!("Skipping file without .{} extension: {:?}", self.extension, path);
                continue;
            }
            if Category::from_path(&path).is_none() {
                debug!("Skipping file without a category name: {:?}", path);
                continue;
            }
            files.push(path);
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        debug!("Found {} record files in {:?}", files.len(), dir);
        Ok(files)
    }

    fn read_file(&self, path: &Path) -> Result<String, SourceError> {
        fs::read_to_string(path).map_err(|source| SourceError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        })
    }
}
