//! Configuration file loading for hvadvilduhelst
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `HVAD_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./hvadvilduhelst.toml` or `./.hvadvilduhelst.toml`
//! 4. Global: `$XDG_CONFIG_HOME/hvadvilduhelst/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDatasetConfig, FileOutputConfig, FileProbeConfig,
};
pub use loader::ConfigLoader;
