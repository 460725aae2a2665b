//! Dataset probing: descriptive inspection of a loaded dataset.
//!
//! Nothing here touches the filesystem; every function takes a
//! [`Dataset`](crate::Dataset) and returns plain serializable values.

pub mod balance;
pub mod characteristics;
pub mod quality;
pub mod report;
pub mod themes;

pub use balance::CategoryBalance;
pub use characteristics::{LengthSummary, OpenerCount, TextCharacteristics};
pub use quality::{QualityIssue, QualityReport, QualityThresholds};
pub use report::{CategoryExamples, ProbeReport, ProbeSettings, StructureSummary};
pub use themes::{ThemeCount, count_themes};
