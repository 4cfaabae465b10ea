//! CSV format adapter.
//!
//! Maps columns by header name with a few accepted aliases.

use crate::io::traits::{EntrySource, ImportedEntry};
use crate::{Error, Result};
use std::io::BufRead;

/// CSV entry source.
///
/// The first row must be a header row containing a name column.
pub struct CsvEntrySource<R: BufRead> {
    reader: csv::Reader<R>,
    column_map: ColumnMap,
}

/// Maps CSV column indices to entry fields.
#[derive(Debug, Default)]
struct ColumnMap {
    id: Option<usize>,
    name: Option<usize>,
    category: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let mut map = Self::default();

        for (i, header) in headers.iter().enumerate() {
            match header.trim().to_lowercase().as_str() {
                "id" | "key" | "slug" => map.id = Some(i),
                "name" | "title" => map.name = Some(i),
                "category" | "type" | "kind" => map.category = Some(i),
                _ => {},
            }
        }

        if map.name.is_none() {
            return Err(Error::InvalidInput(
                "CSV must have a 'name' column (or 'title')".to_string(),
            ));
        }

        Ok(map)
    }
}

impl<R: BufRead> CsvEntrySource<R> {
    /// Creates a new CSV entry source.
    ///
    /// # Errors
    ///
    /// Returns an error if headers cannot be read or the name column is
    /// missing.
    pub fn new(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| Error::OperationFailed {
                operation: "read_csv_headers".to_string(),
                cause: e.to_string(),
            })?
            .clone();
        let column_map = ColumnMap::from_headers(&headers)?;

        Ok(Self {
            reader: csv_reader,
            column_map,
        })
    }

    fn parse_record(&self, record: &csv::StringRecord) -> ImportedEntry {
        let get_field = |idx: Option<usize>| -> Option<String> {
            idx.and_then(|i| record.get(i))
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        ImportedEntry {
            id: get_field(self.column_map.id),
            name: get_field(self.column_map.name).unwrap_or_default(),
            category: get_field(self.column_map.category),
        }
    }
}

impl<R: BufRead> EntrySource for CsvEntrySource<R> {
    fn next(&mut self) -> Result<Option<ImportedEntry>> {
        let mut record = csv::StringRecord::new();

        let has_record = self
            .reader
            .read_record(&mut record)
            .map_err(|e| Error::OperationFailed {
                operation: "read_csv".to_string(),
                cause: e.to_string(),
            })?;
        if !has_record {
            return Ok(None);
        }

        Ok(Some(self.parse_record(&record)))
    }
}
