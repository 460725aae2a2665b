//! Probe configuration from TOML (`[probe]` section)

use hvad_domain::{ProbeSettings, QualityThresholds};
use serde::{Deserialize, Serialize};

/// Raw probe configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProbeConfig {
    /// Maximum `std_dev / mean` of category counts to call the dataset balanced
    pub balance_threshold: f64,
    /// Questions shorter than this many characters are flagged
    pub short_question_chars: usize,
    /// Questions longer than this many characters are flagged
    pub long_question_chars: usize,
    /// Number of question openers to list
    pub top_openers: usize,
    /// Example questions shown per category
    pub examples_per_category: usize,
}

impl Default for FileProbeConfig {
    fn default() -> Self {
        let settings = ProbeSettings::default();
        Self {
            balance_threshold: settings.balance_threshold,
            short_question_chars: settings.quality.short_question_chars,
            long_question_chars: settings.quality.long_question_chars,
            top_openers: settings.top_openers,
            examples_per_category: settings.examples_per_category,
        }
    }
}

impl FileProbeConfig {
    /// Convert to the domain settings type
    pub fn to_settings(&self) -> ProbeSettings {
        ProbeSettings {
            balance_threshold: self.balance_threshold,
            quality: QualityThresholds {
                short_question_chars: self.short_question_chars,
                long_question_chars: self.long_question_chars,
            },
            top_openers: self.top_openers,
            examples_per_category: self.examples_per_category,
        }
    }
}
