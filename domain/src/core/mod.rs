//! Core domain concepts shared across all subdomains.
//!
//! - [`category::Category`]: the thematic label derived from a record file
//! - [`record::QuestionRecord`]: one "would you rather" item with two answers
//! - [`error::RecordError`]: why a record line was rejected

pub mod category;
pub mod error;
pub mod record;
pub mod string;
