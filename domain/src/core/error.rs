//! Domain error types

use serde::Serialize;
use thiserror::Error;

/// Field names a record line must supply.
pub const FIELD_QUESTION: &str = "question";
pub const FIELD_ANSWER_A: &str = "answer_A";
pub const FIELD_ANSWER_B: &str = "answer_B";

/// Reasons a single record line is rejected.
///
/// These are recoverable: the loader skips the line, records a
/// diagnostic and keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum RecordError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Field '{0}' is empty")]
    EmptyField(&'static str),
}

impl RecordError {
    /// The field this error is about, if it concerns a single field
    pub fn field(&self) -> Option<&'static str> {
        match self {
            RecordError::MissingField(name) | RecordError::EmptyField(name) => Some(*name),
            RecordError::InvalidJson(_) => None,
        }
    }
}
