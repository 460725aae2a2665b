//! Category value object

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Thematic grouping of questions (Value Object)
///
/// A category is never stored inside a record line. It comes from the
/// identity of the file the line was read from: `mad.jsonl` holds the
/// questions of category `mad`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Try to create a category, returning None if the name is blank
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    /// Derive the category from a record file path.
    ///
    /// Uses the file's base name with the final extension stripped.
    /// Returns None for paths without a usable file name.
    pub fn from_path(path: &Path) -> Option<Self> {
        let stem = path.file_stem()?.to_str()?;
        Self::try_new(stem)
    }

    /// Get the category name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
