//! Question record entity

use super::category::Category;
use serde::{Deserialize, Serialize};

/// One binary-preference question with its two answer options (Entity)
///
/// Fields are private: a record is immutable once loaded. Construction
/// goes through [`crate::dataset::parse_record_line`], which enforces
/// that every text field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    question: String,
    #[serde(rename = "answer_A")]
    answer_a: String,
    #[serde(rename = "answer_B")]
    answer_b: String,
    category: Category,
}

impl QuestionRecord {
    pub(crate) fn new(
        question: String,
        answer_a: String,
        answer_b: String,
        category: Category,
    ) -> Self {
        Self {
            question,
            answer_a,
            answer_b,
            category,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer_a(&self) -> &str {
        &self.answer_a
    }

    pub fn answer_b(&self) -> &str {
        &self.answer_b
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Both answers are the same option once case and padding are ignored
    pub fn has_identical_answers(&self) -> bool {
        self.answer_a.trim().to_lowercase() == self.answer_b.trim().to_lowercase()
    }
}

impl std::fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} (A: {} / B: {})",
            self.category, self.question, self.answer_a, self.answer_b
        )
    }
}
