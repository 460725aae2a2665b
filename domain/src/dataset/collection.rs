//! The loaded dataset

use super::diagnostic::LineDiagnostic;
use crate::core::category::Category;
use crate::core::record::QuestionRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// All records from one load, plus what was skipped along the way
///
/// Records keep load order (file order, then line order). Category
/// counts only list categories that produced at least one record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dataset {
    records: Vec<QuestionRecord>,
    category_counts: BTreeMap<Category, usize>,
    diagnostics: Vec<LineDiagnostic>,
    files_read: usize,
}

impl Dataset {
    pub fn new(
        records: Vec<QuestionRecord>,
        diagnostics: Vec<LineDiagnostic>,
        files_read: usize,
    ) -> Self {
        let mut category_counts = BTreeMap::new();
        for record in &records {
            *category_counts.entry(record.category().clone()).or_insert(0) += 1;
        }
        Self {
            records,
            category_counts,
            diagnostics,
            files_read,
        }
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn category_counts(&self) -> &BTreeMap<Category, usize> {
        &self.category_counts
    }

    pub fn diagnostics(&self) -> &[LineDiagnostic] {
        &self.diagnostics
    }

    pub fn files_read(&self) -> usize {
        self.files_read
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Categories in name order
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.category_counts.keys()
    }

    pub fn count_for(&self, category: &str) -> usize {
        self.category_counts
            .iter()
            .find(|(c, _)| c.as_str() == category)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Records grouped by category, each group in load order
    pub fn by_category(&self) -> BTreeMap<&Category, Vec<&QuestionRecord>> {
        let mut groups: BTreeMap<&Category, Vec<&QuestionRecord>> = BTreeMap::new();
        for record in &self.records {
            groups.entry(record.category()).or_default().push(record);
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RecordError;
    use crate::dataset::parse_record_line;

    fn record(category: &str, question: &str) -> QuestionRecord {
        let category = Category::try_new(category).unwrap();
        let line = format!(
            r#"{{"question": "{}", "answer_A": "A", "answer_B": "B"}}"#,
            question
        );
        parse_record_line(&line, &category).unwrap()
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = Dataset::default();
        assert!(dataset.is_empty());
        assert!(dataset.category_counts().is_empty());
        assert!(!dataset.has_diagnostics());
    }

    #[test]
    fn test_counts_per_category() {
        let dataset = Dataset::new(
            vec![
                record("mad", "Is eller kage?"),
                record("familie", "Mor eller far?"),
                record("mad", "Pizza eller burger?"),
            ],
            vec![],
            2,
        );
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.count_for("mad"), 2);
        assert_eq!(dataset.count_for("familie"), 1);
        assert_eq!(dataset.count_for("arbejde"), 0);
        let names: Vec<&str> = dataset.categories().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["familie", "mad"]);
    }

    #[test]
    fn test_by_category_keeps_load_order() {
        let dataset = Dataset::new(
            vec![
                record("mad", "Første?"),
                record("familie", "Anden?"),
                record("mad", "Tredje?"),
            ],
            vec![],
            2,
        );
        let groups = dataset.by_category();
        let mad: Vec<&str> = groups
            .iter()
            .find(|(c, _)| c.as_str() == "mad")
            .unwrap()
            .1
            .iter()
            .map(|r| r.question())
            .collect();
        assert_eq!(mad, vec!["Første?", "Tredje?"]);
    }

    #[test]
    fn test_diagnostics_kept() {
        let dataset = Dataset::new(
            vec![],
            vec![LineDiagnostic::new(
                "mad.jsonl",
                1,
                RecordError::MissingField("answer_B"),
            )],
            1,
        );
        assert!(dataset.is_empty());
        assert!(dataset.has_diagnostics());
        assert!(dataset.category_counts().is_empty());
    }
}
