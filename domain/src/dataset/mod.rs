//! Dataset domain: parsing record lines and the loaded collection.
//!
//! - [`parse_record_line`]: validate one JSONL line into a [`QuestionRecord`](crate::QuestionRecord)
//! - [`Dataset`]: ordered records, per-category counts, skipped-line diagnostics

mod collection;
mod diagnostic;
mod parsing;

pub use collection::Dataset;
pub use diagnostic::LineDiagnostic;
pub use parsing::parse_record_line;
