//! Record line parsing and validation
//!
//! A record line is a JSON object with the keys `question` (or the
//! legacy spelling `questions`), `answer_A` and `answer_B`. Any other
//! keys are ignored. The category is supplied by the caller.

use crate::core::category::Category;
use crate::core::error::{FIELD_ANSWER_A, FIELD_ANSWER_B, FIELD_QUESTION, RecordError};
use crate::core::record::QuestionRecord;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct RawRecord {
    question: Option<String>,
    questions: Option<String>,
    #[serde(rename = "answer_A")]
    answer_a: Option<String>,
    #[serde(rename = "answer_B")]
    answer_b: Option<String>,
}

/// Parse one line of a record file into a [`QuestionRecord`].
///
/// Fields are checked in order (question, answer_A, answer_B) and the
/// first problem found is reported.
pub fn parse_record_line(line: &str, category: &Category) -> Result<QuestionRecord, RecordError> {
    let value: Value =
        serde_json::from_str(line.trim()).map_err(|e| RecordError::InvalidJson(e.to_string()))?;
    if !value.is_object() {
        return Err(RecordError::InvalidJson(format!(
            "expected a JSON object, found {}",
            kind_of(&value)
        )));
    }
    let raw =
        RawRecord::deserialize(value).map_err(|e| RecordError::InvalidJson(e.to_string()))?;

    let question = require(raw.question.or(raw.questions), FIELD_QUESTION)?;
    let answer_a = require(raw.answer_a, FIELD_ANSWER_A)?;
    let answer_b = require(raw.answer_b, FIELD_ANSWER_B)?;

    Ok(QuestionRecord::new(
        question,
        answer_a,
        answer_b,
        category.clone(),
    ))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn require(value: Option<String>, field: &'static str) -> Result<String, RecordError> {
    match value {
        None => Err(RecordError::MissingField(field)),
        Some(v) if v.trim().is_empty() => Err(RecordError::EmptyField(field)),
        Some(v) => Ok(v),
    }
}
