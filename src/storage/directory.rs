//! Directory corpus provider: one file per category.
//!
//! ```text
//! almanac/
//! ├── characters.json
//! ├── kingdoms.yaml
//! ├── locations.csv
//! └── relics.json
//! ```
//!
//! Known categories load in almanac order, other stems follow
//! alphabetically. A broken file only drops its own category.

use crate::io::Format;
use crate::models::Category;
use crate::storage::file::FileCorpus;
use crate::storage::traits::{CategoryFailure, CorpusSnapshot, EntryCorpusProvider};
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Corpus spread over per-category files in one directory.
#[derive(Debug, Clone)]
pub struct DirectoryCorpus {
    dir: PathBuf,
}

impl DirectoryCorpus {
    /// Creates a provider for `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory path.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Lists `(category, path)` pairs in load order.
    fn category_files(&self) -> Result<Vec<(String, PathBuf)>> {
        let read_dir = std::fs::read_dir(&self.dir).map_err(|e| Error::OperationFailed {
            operation: "read_corpus_dir".to_string(),
            cause: format!("{}: {e}", self.dir.display()),
        })?;

        let mut files = Vec::new();
        for dir_entry in read_dir.flatten() {
            let path = dir_entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if stem.starts_with('.') || Format::from_path(&path).is_err() {
                tracing::debug!(path = %path.display(), "Skipping non-corpus file");
                continue;
            }
            let category = Category::parse(stem)
                .map_or_else(|| stem.to_lowercase(), |c| c.as_str().to_string());
            files.push((category, path));
        }

        files.sort_by(|(a, a_path), (b, b_path)| {
            category_rank(a)
                .cmp(&category_rank(b))
                .then_with(|| a.cmp(b))
                .then_with(|| a_path.cmp(b_path))
        });

        Ok(files)
    }
}

/// Position in almanac order; unknown categories sort last.
fn category_rank(category: &str) -> usize {
    Category::all()
        .iter()
        .position(|c| c.as_str() == category)
        .unwrap_or(Category::all().len())
}

impl EntryCorpusProvider for DirectoryCorpus {
    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    fn load(&self) -> Result<CorpusSnapshot> {
        let files = self
            .category_files()
            .map_err(|e| Error::CorpusUnavailable(e.to_string()))?;

        let mut snapshot = CorpusSnapshot::default();
        for (category, path) in &files {
            match FileCorpus::new(path)
                .with_default_category(category.clone())
                .read()
            {
                Ok(entries) => snapshot.entries.extend(entries),
                Err(e) => {
                    tracing::warn!(
                        category = %category,
                        error = %e,
                        "Failed to load category, continuing with the rest"
                    );
                    metrics::counter!("lore_corpus_category_failures_total").increment(1);
                    snapshot.failed.push(CategoryFailure {
                        category: category.clone(),
                        cause: e.to_string(),
                    });
                },
            }
        }

        if !files.is_empty() && snapshot.failed.len() == files.len() {
            return Err(Error::CorpusUnavailable(format!(
                "all {} category files in {} failed to load",
                files.len(),
                self.dir.display()
            )));
        }

        tracing::debug!(
            entries = snapshot.len(),
            failed = snapshot.failed.len(),
            "Loaded corpus directory"
        );
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        format!("directory {}", self.dir.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_almanac_order_and_unknown_last() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("zeppelins.csv"), "name\nCloudreaver\n").unwrap();
        fs::write(dir.path().join("relics.csv"), "name\nSunspear\n").unwrap();
        fs::write(
            dir.path().join("characters.json"),
            r#"[{"id": "c1", "name": "Kaelen"}]"#,
        )
        .unwrap();
        fs::write(dir.path().join("README.md"), "not a corpus").unwrap();

        let snapshot = DirectoryCorpus::new(dir.path()).load().unwrap();
        let categories: Vec<&str> = snapshot
            .entries
            .iter()
            .map(|e| e.category.as_str())
            .collect();
        assert_eq!(categories, vec!["characters", "relics", "zeppelins"]);
    }

    #[test]
    fn test_broken_category_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("characters.json"), "[{not json").unwrap();
        fs::write(dir.path().join("kingdoms.yaml"), "- name: Ember Throne\n").unwrap();

        let snapshot = DirectoryCorpus::new(dir.path()).load().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.is_partial());
        assert_eq!(snapshot.failed[0].category, "characters");
    }

    #[test]
    fn test_all_broken_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("characters.json"), "[{not json").unwrap();

        let err = DirectoryCorpus::new(dir.path()).load().unwrap_err();
        assert!(matches!(err, Error::CorpusUnavailable(_)));
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = DirectoryCorpus::new(dir.path()).load().unwrap();
        assert!(snapshot.is_empty());
        assert!(!snapshot.is_partial());
    }

    #[test]
    fn test_missing_directory() {
        let err = DirectoryCorpus::new("/nonexistent/almanac")
            .load()
            .unwrap_err();
        assert!(matches!(err, Error::CorpusUnavailable(_)));
    }
}
