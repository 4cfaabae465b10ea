//! YAML format adapter.
//!
//! Supports a single sequence of entries or a document stream (documents
//! separated by `---`, one entry per document).

use crate::io::traits::{EntrySource, ImportedEntry};
use crate::{Error, Result};
use std::collections::VecDeque;
use std::io::BufRead;

/// YAML entry source.
///
/// Parses all documents up front since YAML requires full parsing.
pub struct YamlEntrySource {
    entries: VecDeque<ImportedEntry>,
}

impl YamlEntrySource {
    /// Creates a new YAML entry source.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or YAML parsing fails.
    pub fn new<R: BufRead>(mut reader: R) -> Result<Self> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| Error::OperationFailed {
                operation: "read_yaml".to_string(),
                cause: e.to_string(),
            })?;

        if content.trim().is_empty() {
            return Ok(Self {
                entries: VecDeque::new(),
            });
        }

        // Try parsing as a sequence first
        if let Ok(entries) = serde_yaml_ng::from_str::<Vec<ImportedEntry>>(&content) {
            return Ok(Self {
                entries: entries.into(),
            });
        }

        let mut entries = VecDeque::new();
        for (doc_index, document) in serde_yaml_ng::Deserializer::from_str(&content).enumerate() {
            let entry: ImportedEntry = serde::Deserialize::deserialize(document).map_err(|e| {
                Error::InvalidInput(format!(
                    "Document {}: Failed to parse YAML: {e}",
                    doc_index + 1
                ))
            })?;
            entries.push_back(entry);
        }

        Ok(Self { entries })
    }
}

impl EntrySource for YamlEntrySource {
    fn next(&mut self) -> Result<Option<ImportedEntry>> {
        Ok(self.entries.pop_front())
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.entries.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_sequence() {
        let yaml = "- name: Shadowfen Marsh\n  category: locations\n- name: Ironwood\n";
        let mut source = YamlEntrySource::new(Cursor::new(yaml)).unwrap();
        assert_eq!(source.size_hint(), Some(2));
        assert_eq!(source.next().unwrap().unwrap().name, "Shadowfen Marsh");
        assert_eq!(source.next().unwrap().unwrap().name, "Ironwood");
        assert!(source.next().unwrap().is_none());
    }

    #[test]
    fn test_document_stream() {
        let yaml = "name: Kaelen\n---\ntitle: Orrin\nkind: characters\n";
        let mut source = YamlEntrySource::new(Cursor::new(yaml)).unwrap();
        assert_eq!(source.next().unwrap().unwrap().name, "Kaelen");
        let second = source.next().unwrap().unwrap();
        assert_eq!(second.name, "Orrin");
        assert_eq!(second.category.as_deref(), Some("characters"));
    }

    #[test]
    fn test_empty() {
        let mut source = YamlEntrySource::new(Cursor::new("   \n")).unwrap();
        assert!(source.next().unwrap().is_none());
    }

    #[test]
    fn test_invalid_document() {
        let yaml = "name: Kaelen\n---\nnot_a_name: 3\n";
        assert!(YamlEntrySource::new(Cursor::new(yaml)).is_err());
    }
}
