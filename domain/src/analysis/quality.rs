//! Quality checks over a loaded dataset

use crate::core::category::Category;
use crate::core::record::QuestionRecord;
use crate::dataset::Dataset;
use serde::Serialize;
use std::collections::HashSet;

/// Character limits for flagging question length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QualityThresholds {
    /// Questions shorter than this are flagged
    pub short_question_chars: usize,
    /// Questions longer than this are flagged
    pub long_question_chars: usize,
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            short_question_chars: 20,
            long_question_chars: 200,
        }
    }
}

/// A record flagged by a quality check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityIssue {
    /// Position in the dataset's record list
    pub index: usize,
    pub category: Category,
    pub question: String,
}

impl QualityIssue {
    fn new(index: usize, record: &QuestionRecord) -> Self {
        Self {
            index,
            category: record.category().clone(),
            question: record.question().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualityReport {
    /// Repeats of a question seen earlier (the first occurrence is not listed)
    pub duplicate_questions: Vec<QualityIssue>,
    pub very_short_questions: Vec<QualityIssue>,
    pub very_long_questions: Vec<QualityIssue>,
    /// Records whose two answers are the same option
    pub identical_answers: Vec<QualityIssue>,
}

impl QualityReport {
    pub fn check(dataset: &Dataset, thresholds: QualityThresholds) -> Self {
        let mut report = Self::default();
        let mut seen: HashSet<&str> = HashSet::new();

        for (index, record) in dataset.records().iter().enumerate() {
            let question = record.question();

            if !seen.insert(question) {
                report
                    .duplicate_questions
                    .push(QualityIssue::new(index, record));
            }

            let len = question.chars().count();
            if len < thresholds.short_question_chars {
                report
                    .very_short_questions
                    .push(QualityIssue::new(index, record));
            } else if len > thresholds.long_question_chars {
                report
                    .very_long_questions
                    .push(QualityIssue::new(index, record));
            }

            if record.has_identical_answers() {
                report.identical_answers.push(QualityIssue::new(index, record));
            }
        }

        report
    }

    pub fn total(&self) -> usize {
        self.duplicate_questions.len()
            + self.very_short_questions.len()
            + self.very_long_questions.len()
            + self.identical_answers.len()
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    /// Non-empty issue lists with a display label
    pub fn sections(&self) -> Vec<(&'static str, &[QualityIssue])> {
        [
            ("Duplicate questions", self.duplicate_questions.as_slice()),
            ("Very short questions", self.very_short_questions.as_slice()),
            ("Very long questions", self.very_long_questions.as_slice()),
            ("Identical answers", self.identical_answers.as_slice()),
        ]
        .into_iter()
        .filter(|(_, issues)| !issues.is_empty())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::parse_record_line;

    fn dataset(rows: &[(&str, &str, &str)]) -> Dataset {
        let category = Category::try_new("mad").unwrap();
        let records = rows
            .iter()
            .map(|(q, a, b)| {
                let line = serde_json::json!({"question": q, "answer_A": a, "answer_B": b});
                parse_record_line(&line.to_string(), &category).unwrap()
            })
            .collect();
        Dataset::new(records, vec![], 1)
    }

    #[test]
    fn test_clean_dataset() {
        let data = dataset(&[
            ("Ville du helst spise is eller kage?", "Is", "Kage"),
            ("Ville du helst drikke kaffe eller te?", "Kaffe", "Te"),
        ]);
        let report = QualityReport::check(&data, QualityThresholds::default());
        assert!(report.is_clean());
        assert!(report.sections().is_empty());
    }

    #[test]
    fn test_duplicate_flags_later_occurrence() {
        let data = dataset(&[
            ("Ville du helst spise is eller kage?", "Is", "Kage"),
            ("Ville du helst drikke kaffe eller te?", "Kaffe", "Te"),
            ("Ville du helst spise is eller kage?", "Is", "Kage"),
        ]);
        let report = QualityReport::check(&data, QualityThresholds::default());
        assert_eq!(report.duplicate_questions.len(), 1);
        assert_eq!(report.duplicate_questions[0].index, 2);
    }

    #[test]
    fn test_length_thresholds() {
        let long = "Ville du helst ".repeat(20);
        let data = dataset(&[
            ("Is eller kage?", "Is", "Kage"),
            (long.as_str(), "A", "B"),
            ("Ville du helst spise is eller kage?", "Is", "Kage"),
        ]);
        let report = QualityReport::check(&data, QualityThresholds::default());
        assert_eq!(report.very_short_questions.len(), 1);
        assert_eq!(report.very_short_questions[0].index, 0);
        assert_eq!(report.very_long_questions.len(), 1);
        assert_eq!(report.very_long_questions[0].index, 1);
        assert_eq!(report.total(), 2);
    }

    #[test]
    fn test_identical_answers() {
        let data = dataset(&[("Ville du helst spise is eller is?", "Is", "is")]);
        let report = QualityReport::check(&data, QualityThresholds::default());
        assert_eq!(report.identical_answers.len(), 1);
        assert_eq!(report.sections()[0].0, "Identical answers");
    }
}
