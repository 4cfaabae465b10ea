//! Corpus file I/O.
//!
//! Reads `{id, name, category}` records from JSON, YAML and CSV files.
//!
//! # Supported Formats
//!
//! | Format | Notes |
//! |--------|-------|
//! | JSON | Newline-delimited (NDJSON) or array |
//! | YAML | Sequence or document stream |
//! | CSV | Header row with `name`, optional `id` and `category` |
//!
//! # Example
//!
//! ```rust
//! use lorecheck::io::{Format, read_entries};
//! use std::io::Cursor;
//!
//! let csv = "name\nSunspear\nMoonblade\n";
//! let entries = read_entries(Cursor::new(csv), Format::Csv, Some("relics")).unwrap();
//!
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].id, "relics-1");
//! assert_eq!(entries[1].category, "relics");
//! ```

pub mod formats;
mod traits;

pub use formats::{Format, create_entry_source};
pub use traits::{EntrySource, ImportedEntry};

use crate::Result;
use crate::models::EntryRef;
use std::io::BufRead;

/// Reads every entry from `reader`.
///
/// `default_category` is applied to records without a category of their
/// own.
///
/// # Errors
///
/// Returns an error on I/O or parse failure, or when a record has a blank
/// name or no resolvable category.
pub fn read_entries<R: BufRead + 'static>(
    reader: R,
    format: Format,
    default_category: Option<&str>,
) -> Result<Vec<EntryRef>> {
    let mut source = create_entry_source(reader, format)?;
    let mut entries = Vec::with_capacity(source.size_hint().unwrap_or(0));

    while let Some(imported) = source.next()? {
        let position = entries.len();
        entries.push(imported.into_entry(position, default_category)?);
    }

    Ok(entries)
}
