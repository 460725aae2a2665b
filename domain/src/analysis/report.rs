//! Probe report: everything the inspection pass produces

use super::balance::CategoryBalance;
use super::characteristics::TextCharacteristics;
use super::quality::{QualityReport, QualityThresholds};
use super::themes::{ThemeCount, count_themes};
use crate::core::category::Category;
use crate::core::record::QuestionRecord;
use crate::dataset::Dataset;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Knobs for [`ProbeReport::build`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProbeSettings {
    /// Categories count as balanced while `std_dev / mean` stays below this
    pub balance_threshold: f64,
    pub quality: QualityThresholds,
    /// How many question openers to rank
    pub top_openers: usize,
    pub examples_per_category: usize,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            balance_threshold: 0.2,
            quality: QualityThresholds::default(),
            top_openers: 10,
            examples_per_category: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureSummary {
    pub total_records: usize,
    pub num_categories: usize,
    pub categories: Vec<Category>,
    pub files_read: usize,
    pub skipped_lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryExamples {
    pub category: Category,
    /// Records in the category, not just the ones shown
    pub total: usize,
    pub examples: Vec<QuestionRecord>,
}

/// Read-only inspection of a loaded dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeReport {
    pub generated_at: DateTime<Utc>,
    pub structure: StructureSummary,
    pub balance: Option<CategoryBalance>,
    pub characteristics: Option<TextCharacteristics>,
    pub themes: Vec<ThemeCount>,
    pub quality: QualityReport,
    pub examples: Vec<CategoryExamples>,
}

impl ProbeReport {
    pub fn build(dataset: &Dataset, settings: &ProbeSettings) -> Self {
        let structure = StructureSummary {
            total_records: dataset.len(),
            num_categories: dataset.category_counts().len(),
            categories: dataset.categories().cloned().collect(),
            files_read: dataset.files_read(),
            skipped_lines: dataset.diagnostics().len(),
        };

        let examples = dataset
            .by_category()
            .into_iter()
            .map(|(category, records)| CategoryExamples {
                category: category.clone(),
                total: records.len(),
                examples: records
                    .into_iter()
                    .take(settings.examples_per_category)
                    .cloned()
                    .collect(),
            })
            .collect();

        Self {
            generated_at: Utc::now(),
            structure,
            balance: CategoryBalance::compute(dataset, settings.balance_threshold),
            characteristics: TextCharacteristics::compute(dataset, settings.top_openers),
            themes: count_themes(dataset),
            quality: QualityReport::check(dataset, settings.quality),
            examples,
        }
    }
}
