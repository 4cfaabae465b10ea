//! Single-file corpus provider.

use crate::io::{Format, read_entries};
use crate::models::{Category, EntryRef};
use crate::storage::traits::{CorpusSnapshot, EntryCorpusProvider};
use crate::{Error, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Maximum corpus file size (16MB).
const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Corpus read from one JSON, YAML or CSV file.
///
/// Records without a category take the file's default category, which is
/// the file stem when it names a known [`Category`] (`relics.csv`).
#[derive(Debug, Clone)]
pub struct FileCorpus {
    path: PathBuf,
    format: Option<Format>,
    default_category: Option<String>,
}

impl FileCorpus {
    /// Creates a provider for `path`, detecting format and default
    /// category from the file name.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let default_category = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(Category::parse)
            .map(|c| c.as_str().to_string());

        Self {
            path,
            format: None,
            default_category,
        }
    }

    /// Overrides format detection.
    #[must_use]
    pub const fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the category applied to records that have none.
    #[must_use]
    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = Some(category.into());
        self
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all entries from the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, too large, or unparsable.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<Vec<EntryRef>> {
        let format = match self.format {
            Some(format) => format,
            None => Format::from_path(&self.path)?,
        };

        let metadata = std::fs::metadata(&self.path).map_err(|e| Error::OperationFailed {
            operation: "stat_corpus_file".to_string(),
            cause: format!("{}: {e}", self.path.display()),
        })?;
        if metadata.len() > MAX_FILE_SIZE {
            return Err(Error::InvalidInput(format!(
                "{} exceeds maximum corpus file size ({} > {MAX_FILE_SIZE} bytes)",
                self.path.display(),
                metadata.len()
            )));
        }

        let file = File::open(&self.path).map_err(|e| Error::OperationFailed {
            operation: "open_corpus_file".to_string(),
            cause: format!("{}: {e}", self.path.display()),
        })?;

        let entries = read_entries(
            BufReader::new(file),
            format,
            self.default_category.as_deref(),
        )
        .map_err(|e| match e {
            Error::InvalidInput(msg) => {
                Error::InvalidInput(format!("{}: {msg}", self.path.display()))
            },
            other => other,
        })?;

        tracing::debug!(entries = entries.len(), "Read corpus file");
        Ok(entries)
    }
}

impl EntryCorpusProvider for FileCorpus {
    fn load(&self) -> Result<CorpusSnapshot> {
        self.read()
            .map(CorpusSnapshot::new)
            .map_err(|e| Error::CorpusUnavailable(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_category_from_stem() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "relics.csv", "name\nSunspear\n");

        let snapshot = FileCorpus::new(path).load().unwrap();
        assert_eq!(snapshot.entries[0].category, "relics");
        assert_eq!(snapshot.entries[0].id, "relics-1");
    }

    #[test]
    fn test_mixed_file_needs_categories() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "lore.json",
            r#"[{"id": "1", "name": "Kaelen", "category": "characters"}]"#,
        );
        let snapshot = FileCorpus::new(&path).load().unwrap();
        assert_eq!(snapshot.len(), 1);

        let path = write_file(dir.path(), "bad.json", r#"[{"name": "Kaelen"}]"#);
        let err = FileCorpus::new(&path).load().unwrap_err();
        assert!(matches!(err, Error::CorpusUnavailable(_)));
    }

    #[test]
    fn test_explicit_format_and_category() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "entries.txt", "- name: Ironwood\n");

        let snapshot = FileCorpus::new(path)
            .with_format(Format::Yaml)
            .with_default_category("locations")
            .load()
            .unwrap();
        assert_eq!(snapshot.entries[0].category, "locations");
    }

    #[test]
    fn test_missing_file() {
        let err = FileCorpus::new("/nonexistent/characters.json")
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("corpus unavailable"));
    }
}
