//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! ```toml
//! [dataset]
//! dir = "data/hygdk"
//! extension = "jsonl"
//!
//! [probe]
//! balance_threshold = 0.2
//! short_question_chars = 20
//! long_question_chars = 200
//! top_openers = 10
//! examples_per_category = 2
//!
//! [output]
//! format = "text"
//! color = true
//! ```

mod dataset;
mod output;
mod probe;

pub use dataset::FileDatasetConfig;
pub use output::FileOutputConfig;
pub use probe::FileProbeConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("dataset.extension cannot be empty")]
    EmptyExtension,

    #[error("probe.balance_threshold must be positive (got {0})")]
    InvalidBalanceThreshold(f64),

    #[error(
        "probe.short_question_chars ({short}) must be below probe.long_question_chars ({long})"
    )]
    InvalidLengthLimits { short: usize, long: usize },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where record files live
    pub dataset: FileDatasetConfig,
    /// Probe report settings
    pub probe: FileProbeConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.dataset.extension.trim().trim_start_matches('.').is_empty() {
            return Err(ConfigValidationError::EmptyExtension);
        }

        let threshold = self.probe.balance_threshold;
        if threshold.is_nan() || threshold <= 0.0 {
            return Err(ConfigValidationError::InvalidBalanceThreshold(threshold));
        }

        if self.probe.short_question_chars >= self.probe.long_question_chars {
            return Err(ConfigValidationError::InvalidLengthLimits {
                short: self.probe.short_question_chars,
                long: self.probe.long_question_chars,
            });
        }

        Ok(())
    }
}
