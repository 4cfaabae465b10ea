//! Existing lore entries as seen by the conflict checker.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Category;

/// A named lore entity from the almanac corpus.
///
/// Snapshot value: the checker only reads it. `category` is kept as a plain
/// string so categories unknown to [`Category`] pass through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryRef {
    /// Backend identifier of the entry.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Content category (`characters`, `kingdoms`, ...).
    pub category: String,
}

impl EntryRef {
    /// Creates a new entry reference.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
        }
    }

    /// Returns the known category of this entry, if any.
    #[must_use]
    pub fn known_category(&self) -> Option<Category> {
        Category::parse(&self.category)
    }
}

impl fmt::Display for EntryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.category)
    }
}
