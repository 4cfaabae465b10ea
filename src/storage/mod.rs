//! Corpus providers.
//!
//! The conflict detector works on a snapshot list of entries; providers in
//! this module produce that snapshot.
//!
//! | Provider | Source |
//! |----------|--------|
//! | [`InMemoryCorpus`] | Entries already in memory |
//! | [`FileCorpus`] | One JSON/YAML/CSV file |
//! | [`DirectoryCorpus`] | One file per category |

mod directory;
mod file;
mod memory;
mod traits;

pub use directory::DirectoryCorpus;
pub use file::FileCorpus;
pub use memory::InMemoryCorpus;
pub use traits::{CategoryFailure, CorpusSnapshot, EntryCorpusProvider};

use std::path::Path;

/// Opens a provider for `path`: a directory becomes a [`DirectoryCorpus`],
/// anything else a [`FileCorpus`].
#[must_use]
pub fn open_corpus(path: &Path) -> Box<dyn EntryCorpusProvider> {
    if path.is_dir() {
        Box::new(DirectoryCorpus::new(path))
    } else {
        Box::new(FileCorpus::new(path))
    }
}
