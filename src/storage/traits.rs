//! Corpus provider trait and snapshot types.

use crate::Result;
use crate::models::EntryRef;
use serde::Serialize;

/// A category that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFailure {
    /// Category name.
    pub category: String,
    /// Why loading failed.
    pub cause: String,
}

/// A consistent, owned view of the corpus at load time.
///
/// `failed` lists categories that could not be loaded; their entries are
/// missing from `entries`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CorpusSnapshot {
    /// Entries in provider order.
    pub entries: Vec<EntryRef>,
    /// Categories that failed to load.
    pub failed: Vec<CategoryFailure>,
}

impl CorpusSnapshot {
    /// Creates a complete snapshot.
    #[must_use]
    pub const fn new(entries: Vec<EntryRef>) -> Self {
        Self {
            entries,
            failed: Vec::new(),
        }
    }

    /// Returns true if some categories failed to load.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the snapshot has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns entry counts per category in first-seen order.
    #[must_use]
    pub fn counts_by_category(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for entry in &self.entries {
            match counts.iter_mut().find(|(c, _)| *c == entry.category) {
                Some((_, n)) => *n += 1,
                None => counts.push((entry.category.clone(), 1)),
            }
        }
        counts
    }
}

/// Source of the entry corpus.
///
/// Providers aggregate entries across all content categories. A category
/// that fails to load should be reported in [`CorpusSnapshot::failed`]
/// rather than failing the whole load; `Err` is reserved for "nothing could
/// be loaded", which callers must treat as "check unavailable", not as
/// "no conflicts".
pub trait EntryCorpusProvider: Send + Sync {
    /// Loads a snapshot of the corpus.
    fn load(&self) -> Result<CorpusSnapshot>;

    /// Short human-readable description of where entries come from.
    fn describe(&self) -> String {
        "corpus".to_string()
    }
}

impl<P: EntryCorpusProvider + ?Sized> EntryCorpusProvider for Box<P> {
    fn load(&self) -> Result<CorpusSnapshot> {
        (**self).load()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_category() {
        let snapshot = CorpusSnapshot::new(vec![
            EntryRef::new("1", "Kaelen", "characters"),
            EntryRef::new("2", "Ironwood", "locations"),
            EntryRef::new("3", "Orrin", "characters"),
        ]);
        assert_eq!(
            snapshot.counts_by_category(),
            vec![("characters".to_string(), 2), ("locations".to_string(), 1)]
        );
        assert!(!snapshot.is_partial());
        assert_eq!(snapshot.len(), 3);
    }

    #[test]
    fn test_partial() {
        let snapshot = CorpusSnapshot {
            entries: Vec::new(),
            failed: vec![CategoryFailure {
                category: "relics".to_string(),
                cause: "boom".to_string(),
            }],
        };
        assert!(snapshot.is_partial());
        assert!(snapshot.is_empty());
    }
}
