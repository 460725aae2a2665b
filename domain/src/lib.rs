//! Domain layer for hvadvilduhelst
//!
//! This crate contains the core entities, value objects and analysis.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question Record
//!
//! A "hvad vil du helst" item: a question with exactly two answer options,
//! tagged with the category of the file it came from.
//!
//! ## Dataset
//!
//! The result of one load: records in load order, per-category counts and
//! diagnostics for every line that was skipped.
//!
//! ## Probe
//!
//! A read-only report over a dataset: balance, text characteristics,
//! theme keyword hits, quality issues and examples.

pub mod analysis;
pub mod config;
pub mod core;
pub mod dataset;

// Re-export commonly used types
pub use analysis::{ProbeReport, ProbeSettings, QualityReport, QualityThresholds};
pub use config::OutputFormat;
pub use core::{category::Category, error::RecordError, record::QuestionRecord};
pub use dataset::{Dataset, LineDiagnostic, parse_record_line};
