//! Core traits for reading corpus files.
//!
//! Defines the [`EntrySource`] trait that format adapters implement and the
//! loosely-typed [`ImportedEntry`] record they yield.

use crate::models::EntryRef;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Intermediate representation of an entry read from a corpus file.
///
/// # Field Mapping
///
/// | Field | Required | Aliases | Default |
/// |-------|----------|---------|---------|
/// | `name` | Yes | `title` | - |
/// | `category` | No | `type`, `kind` | File category |
/// | `id` | No | `key`, `slug` | `<category>-<position>` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedEntry {
    /// Backend identifier.
    #[serde(default, alias = "key", alias = "slug")]
    pub id: Option<String>,

    /// Display name (required).
    #[serde(alias = "title")]
    pub name: String,

    /// Content category.
    #[serde(default, alias = "type", alias = "kind")]
    pub category: Option<String>,
}

impl ImportedEntry {
    /// Creates an imported entry with just a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: None,
        }
    }

    /// Sets the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Converts into an [`EntryRef`].
    ///
    /// `position` is the zero-based record position, used to synthesize a
    /// missing id. `default_category` applies when the record has none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the name is blank or no category
    /// can be determined.
    pub fn into_entry(self, position: usize, default_category: Option<&str>) -> Result<EntryRef> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput(format!(
                "Record {}: name is empty",
                position + 1
            )));
        }

        let category = self
            .category
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .or_else(|| default_category.map(str::to_string))
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "Record {}: no category for \"{name}\"",
                    position + 1
                ))
            })?;

        let id = self
            .id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("{category}-{}", position + 1));

        Ok(EntryRef::new(id, name, category))
    }
}

/// Source of imported entries.
///
/// Implementations read entries from a specific format (JSON, YAML, CSV)
/// and yield them one at a time.
pub trait EntrySource {
    /// Reads the next entry from the source.
    ///
    /// Returns `Ok(None)` when the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O errors occur.
    fn next(&mut self) -> Result<Option<ImportedEntry>>;

    /// Returns an estimate of the total number of records, if known.
    fn size_hint(&self) -> Option<usize> {
        None
    }
}
