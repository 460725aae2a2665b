//! Dataset configuration from TOML (`[dataset]` section)

use serde::{Deserialize, Serialize};

/// Raw dataset configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDatasetConfig {
    /// Directory holding one record file per category
    pub dir: String,
    /// Extension of record files (without the dot)
    pub extension: String,
}

impl Default for FileDatasetConfig {
    fn default() -> Self {
        Self {
            dir: "data/hygdk".to_string(),
            extension: "jsonl".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_deserialize() {
        let toml_str = r#"
[dataset]
dir = "/srv/hvadvilduhelst/hygdk"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.dataset.dir, "/srv/hvadvilduhelst/hygdk");
        assert_eq!(config.dataset.extension, FileDatasetConfig::default().extension);
    }
}
