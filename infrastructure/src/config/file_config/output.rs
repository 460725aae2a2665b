//! Output configuration from TOML (`[output]` section)

use hvad_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format; the `--output-format` flag wins when given
    pub format: Option<OutputFormat>,
    /// Colorize console text (never affects JSON)
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
