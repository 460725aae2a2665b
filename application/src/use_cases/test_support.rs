//! In-memory fakes for use case tests

use crate::ports::dataset_writer::DatasetWriter;
use crate::ports::progress::LoadProgressNotifier;
use crate::ports::record_source::{RecordSource, SourceError};
use hvad_domain::{Category, Dataset, QuestionRecord};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Record source backed by a list of (file name, content) pairs
pub(crate) struct InMemorySource {
    files: Vec<(String, Option<String>)>,
    missing: bool,
}

impl InMemorySource {
    pub(crate) fn new() -> Self {
        Self {
            files: Vec::new(),
            missing: false,
        }
    }

    /// A source whose directory does not exist
    pub(crate) fn missing() -> Self {
        Self {
            files: Vec::new(),
            missing: true,
        }
    }

    pub(crate) fn with_file(mut self, name: &str, content: &str) -> Self {
        self.files.push((name.to_string(), Some(content.to_string())));
        self
    }

    pub(crate) fn with_unreadable_file(mut self, name: &str) -> Self {
        self.files.push((name.to_string(), None));
        self
    }
}

impl RecordSource for InMemorySource {
    fn list_files(&self, dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
        if self.missing {
            return Err(SourceError::DirectoryNotFound(dir.to_path_buf()));
        }
        Ok(self.files.iter().map(|(name, _)| dir.join(name)).collect())
    }

    fn read_file(&self, path: &Path) -> Result<String, SourceError> {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        match self.files.iter().find(|(n, _)| n == name) {
            Some((_, Some(content))) => Ok(content.clone()),
            _ => Err(SourceError::FileUnreadable {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            }),
        }
    }
}

/// Writer that keeps written records in memory
#[derive(Default)]
pub(crate) struct InMemoryWriter {
    pub(crate) existing: Vec<PathBuf>,
    pub(crate) written: Mutex<Vec<(PathBuf, Vec<QuestionRecord>)>>,
}

impl DatasetWriter for InMemoryWriter {
    fn exists(&self, dest: &Path) -> bool {
        self.existing.iter().any(|p| p == dest)
    }

    fn write_records(&self, dest: &Path, records: &[QuestionRecord]) -> io::Result<usize> {
        self.written
            .lock()
            .unwrap()
            .push((dest.to_path_buf(), records.to_vec()));
        Ok(records.len())
    }
}

/// Progress notifier that records every callback as a string
#[derive(Default)]
pub(crate) struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl LoadProgressNotifier for RecordingProgress {
    fn on_load_start(&self, total_files: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("start:{}", total_files));
    }

    fn on_file_loaded(&self, category: &Category, records: usize, skipped: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("file:{}:{}:{}", category, records, skipped));
    }

    fn on_load_complete(&self, dataset: &Dataset) {
        self.events
            .lock()
            .unwrap()
            .push(format!("complete:{}", dataset.len()));
    }
}
