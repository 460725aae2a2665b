//! Category balance

use crate::core::category::Category;
use crate::dataset::Dataset;
use serde::Serialize;
use std::collections::BTreeMap;

/// How evenly questions are spread over categories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBalance {
    pub counts: BTreeMap<Category, usize>,
    pub mean: f64,
    /// Population standard deviation of the counts
    pub std_dev: f64,
    pub min: usize,
    pub max: usize,
    /// `std_dev / mean` stayed below the threshold
    pub is_balanced: bool,
}

impl CategoryBalance {
    /// Returns None when the dataset has no records.
    pub fn compute(dataset: &Dataset, threshold: f64) -> Option<Self> {
        let counts = dataset.category_counts();
        if counts.is_empty() {
            return None;
        }

        let values: Vec<f64> = counts.values().map(|&c| c as f64).collect();
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        Some(Self {
            counts: counts.clone(),
            mean,
            std_dev,
            min: counts.values().copied().min().unwrap_or(0),
            max: counts.values().copied().max().unwrap_or(0),
            is_balanced: std_dev / mean < threshold,
        })
    }

    /// Coefficient of variation (`std_dev / mean`)
    pub fn variation(&self) -> f64 {
        self.std_dev / self.mean
    }
}
