//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for hvad_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => hvad_domain::OutputFormat::Text,
            OutputFormat::Json => hvad_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for hvadvilduhelst
#[derive(Parser, Debug)]
#[command(name = "hvadvilduhelst")]
#[command(author, version, about = "Load and inspect the \"hvad vil du helst\" dataset")]
#[command(long_about = r#"
hvadvilduhelst loads a directory of category files, one JSON record per
line, and tags every record with the category named by its file.

Malformed lines are skipped and reported after the load. A missing or
unreadable directory or file aborts the command.

Configuration files are loaded from (in priority order):
1. HVAD_* environment variables
2. --config <path>           Explicit config file
3. ./hvadvilduhelst.toml     Project-level config
4. ~/.config/hvadvilduhelst/config.toml   Global config

Example:
  hvadvilduhelst load data/hygdk
  hvadvilduhelst -o json probe
  hvadvilduhelst export --output build/alle.jsonl --force
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides `output.format` from config)
    #[arg(short, long = "output-format", value_enum, global = true)]
    pub output_format: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load the dataset and print record counts per category
    Load {
        /// Dataset directory (defaults to `dataset.dir` from config)
        dir: Option<PathBuf>,
    },

    /// Load the dataset and print a descriptive probe report
    Probe {
        /// Dataset directory (defaults to `dataset.dir` from config)
        dir: Option<PathBuf>,
    },

    /// Load the dataset and write all records to one JSONL file
    Export {
        /// Dataset directory (defaults to `dataset.dir` from config)
        dir: Option<PathBuf>,

        /// Destination file
        #[arg(long, value_name = "PATH")]
        output: PathBuf,

        /// Overwrite the destination if it exists
        #[arg(long)]
        force: bool,
    },
}

impl Command {
    /// Dataset directory given on the command line, if any
    pub fn dir(&self) -> Option<&PathBuf> {
        match self {
            Command::Load { dir } | Command::Probe { dir } | Command::Export { dir, .. } => {
                dir.as_ref()
            }
        }
    }
}
