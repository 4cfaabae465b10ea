//! In-memory corpus provider.

use crate::Result;
use crate::models::EntryRef;
use crate::storage::traits::{CorpusSnapshot, EntryCorpusProvider};

/// Corpus held in memory.
///
/// Useful for tests and for callers that already fetched the entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    entries: Vec<EntryRef>,
}

impl InMemoryCorpus {
    /// Creates a corpus from entries.
    #[must_use]
    pub const fn new(entries: Vec<EntryRef>) -> Self {
        Self { entries }
    }

    /// Adds an entry.
    pub fn push(&mut self, entry: EntryRef) {
        self.entries.push(entry);
    }

    /// Returns the entries.
    #[must_use]
    pub fn entries(&self) -> &[EntryRef] {
        &self.entries
    }
}

impl FromIterator<EntryRef> for InMemoryCorpus {
    fn from_iter<I: IntoIterator<Item = EntryRef>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl EntryCorpusProvider for InMemoryCorpus {
    fn load(&self) -> Result<CorpusSnapshot> {
        Ok(CorpusSnapshot::new(self.entries.clone()))
    }

    fn describe(&self) -> String {
        format!("in-memory ({} entries)", self.entries.len())
    }
}
