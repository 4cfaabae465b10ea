//! Format adapters for corpus files.
//!
//! Each format implements [`EntrySource`].

pub mod csv;
pub mod json;
pub mod yaml;

use crate::{Error, Result};
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use super::traits::EntrySource;

/// Supported corpus file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// JSON (newline-delimited or array).
    Json,
    /// YAML (sequence or document stream).
    Yaml,
    /// CSV with a header row.
    Csv,
}

impl Format {
    /// Returns all supported formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Json, Self::Yaml, Self::Csv]
    }

    /// Returns the canonical file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }

    /// Detects format from file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is missing or not recognized.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        match ext.as_deref() {
            Some(ext) => Self::from_str(ext).map_err(|_| {
                Error::InvalidInput(format!("Unsupported file extension: .{ext}"))
            }),
            None => Err(Error::InvalidInput(
                "Cannot determine format: file has no extension".to_string(),
            )),
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" | "ndjson" | "jsonl" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            _ => Err(Error::InvalidInput(format!("Unknown format: {s}"))),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Creates an entry source for the given format and reader.
///
/// # Errors
///
/// Returns an error if the source cannot be initialised (unreadable YAML,
/// missing CSV header).
pub fn create_entry_source<R: BufRead + 'static>(
    reader: R,
    format: Format,
) -> Result<Box<dyn EntrySource>> {
    match format {
        Format::Json => Ok(Box::new(json::JsonEntrySource::new(reader))),
        Format::Yaml => Ok(Box::new(yaml::YamlEntrySource::new(reader)?)),
        Format::Csv => Ok(Box::new(csv::CsvEntrySource::new(reader)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!(Format::from_str("json").unwrap(), Format::Json);
        assert_eq!(Format::from_str("JSONL").unwrap(), Format::Json);
        assert_eq!(Format::from_str("YAML").unwrap(), Format::Yaml);
        assert_eq!(Format::from_str("csv").unwrap(), Format::Csv);
        assert!(Format::from_str("parquet").is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            Format::from_path(Path::new("characters.json")).unwrap(),
            Format::Json
        );
        assert_eq!(
            Format::from_path(Path::new("kingdoms.yml")).unwrap(),
            Format::Yaml
        );
        assert_eq!(
            Format::from_path(Path::new("RELICS.CSV")).unwrap(),
            Format::Csv
        );
        assert!(Format::from_path(Path::new("notes.txt")).is_err());
        assert!(Format::from_path(Path::new("README")).is_err());
    }

    #[test]
    fn test_every_format_detected_from_its_extension() {
        for format in Format::all() {
            let path = format!("characters.{}", format.extension());
            assert_eq!(Format::from_path(Path::new(&path)).unwrap(), *format);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Format::Yaml.to_string(), "yaml");
    }
}
