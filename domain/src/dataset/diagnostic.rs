//! Per-line load diagnostics

use crate::core::error::RecordError;
use serde::Serialize;

/// A record line that was skipped during loading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineDiagnostic {
    /// File name the line came from
    pub source: String,
    /// 1-based line number within the file
    pub line: usize,
    pub error: RecordError,
}

impl LineDiagnostic {
    pub fn new(source: impl Into<String>, line: usize, error: RecordError) -> Self {
        Self {
            source: source.into(),
            line,
            error,
        }
    }
}

impl std::fmt::Display for LineDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.source, self.line, self.error)
    }
}
