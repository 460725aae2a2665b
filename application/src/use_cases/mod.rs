//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod export_dataset;
pub mod load_dataset;
pub mod probe_dataset;

#[cfg(test)]
pub(crate) mod test_support;
