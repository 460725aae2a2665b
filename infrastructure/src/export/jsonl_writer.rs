//! JSONL file writer for loaded records.
//!
//! Each [`QuestionRecord`] is serialized as a single JSON line with
//! `question`, `answer_A`, `answer_B` and `category` fields, written
//! through a buffered writer.

use hvad_application::DatasetWriter;
use hvad_domain::QuestionRecord;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Writes records as one JSON object per line.
#[derive(Debug, Clone, Default)]
pub struct JsonlDatasetWriter;

impl JsonlDatasetWriter {
    pub fn new() -> Self {
        Self
    }
}

impl DatasetWriter for JsonlDatasetWriter {
    fn exists(&self, dest: &Path) -> bool {
        dest.exists()
    }

    /// Create (or truncate) `dest` and write every record to it.
    ///
    /// Parent directories are created when missing.
    fn write_records(&self, dest: &Path, records: &[QuestionRecord]) -> io::Result<usize> {
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(File::create(dest)?);
        for record in records {
            let line = serde_json::to_string(record).map_err(io::Error::other)?;
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;

        debug!("Wrote {} records to {}", records.len(), dest.display());
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hvad_domain::{Category, parse_record_line};

    fn record(line: &str, category: &str) -> QuestionRecord {
        parse_record_line(line, &Category::try_new(category).unwrap()).unwrap()
    }

    #[test]
    fn test_writes_valid_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("alle.jsonl");

        let records = vec![
            record(
                r#"{"question":"Ville du helst have ost eller skinke?","answer_A":"ost","answer_B":"skinke"}"#,
                "mad",
            ),
            record(
                r#"{"question":"Ville du helst arbejde hjemme?","answer_A":"ja","answer_B":"nej"}"#,
                "arbejde",
            ),
        ];

        let writer = JsonlDatasetWriter::new();
        assert!(!writer.exists(&path));
        let written = writer.write_records(&path, &records).unwrap();
        assert_eq!(written, 2);
        assert!(writer.exists(&path));

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["question"], "Ville du helst have ost eller skinke?");
        assert_eq!(first["answer_A"], "ost");
        assert_eq!(first["answer_B"], "skinke");
        assert_eq!(first["category"], "mad");

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["category"], "arbejde");
    }

    #[test]
    fn test_output_reloads_as_same_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mad.jsonl");
        let records = vec![record(
            r#"{"question":"Q?","answer_A":"a","answer_B":"b"}"#,
            "mad",
        )];

        JsonlDatasetWriter::new()
            .write_records(&path, &records)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let category = Category::from_path(&path).unwrap();
        let reloaded = parse_record_line(content.trim_end(), &category).unwrap();
        assert_eq!(reloaded, records[0]);
    }

    #[test]
    fn test_empty_records_create_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tom.jsonl");

        let written = JsonlDatasetWriter::new().write_records(&path, &[]).unwrap();
        assert_eq!(written, 0);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mad.jsonl");
        std::fs::write(&path, "gammelt indhold\n").unwrap();

        let records = vec![record(
            r#"{"question":"Q?","answer_A":"a","answer_B":"b"}"#,
            "mad",
        )];
        JsonlDatasetWriter::new()
            .write_records(&path, &records)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("gammelt"));
        assert_eq!(content.lines().count(), 1);
    }
}
