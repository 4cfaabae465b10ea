//! JSON format adapter.
//!
//! Supports both newline-delimited JSON (NDJSON/JSONL) and JSON arrays.

use crate::io::traits::{EntrySource, ImportedEntry};
use crate::{Error, Result};
use std::collections::VecDeque;
use std::io::BufRead;

/// JSON entry source.
///
/// Detects the layout from the first non-blank line:
/// - **Array**: a JSON array of objects `[{...}, {...}]`, parsed up front
/// - **NDJSON/JSONL**: one JSON object per line, parsed lazily
pub struct JsonEntrySource<R: BufRead> {
    reader: R,
    /// Buffered entries (whole array, or the first NDJSON record).
    buffer: VecDeque<ImportedEntry>,
    /// Whether the layout has been detected.
    started: bool,
    /// Whether the input is a single array.
    array_mode: bool,
    /// Line number for error reporting.
    line_number: usize,
}

impl<R: BufRead> JsonEntrySource<R> {
    /// Creates a new JSON entry source.
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: VecDeque::new(),
            started: false,
            array_mode: false,
            line_number: 0,
        }
    }

    /// Reads the next non-blank line, returning `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>> {
        loop {
            let mut line = String::new();
            let bytes_read = self
                .reader
                .read_line(&mut line)
                .map_err(|e| Error::OperationFailed {
                    operation: "read_json".to_string(),
                    cause: e.to_string(),
                })?;
            if bytes_read == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            if !line.trim().is_empty() {
                return Ok(Some(line));
            }
        }
    }

    fn parse_line(&self, line: &str) -> Result<ImportedEntry> {
        serde_json::from_str(line.trim()).map_err(|e| {
            Error::InvalidInput(format!(
                "Line {}: Failed to parse JSON object: {e}",
                self.line_number
            ))
        })
    }

    /// Detects the layout and fills the buffer with the first record(s).
    fn detect_format(&mut self) -> Result<()> {
        self.started = true;
        let Some(first_line) = self.next_line()? else {
            return Ok(());
        };

        if first_line.trim_start().starts_with('[') {
            self.array_mode = true;
            let mut remaining = String::new();
            self.reader
                .read_to_string(&mut remaining)
                .map_err(|e| Error::OperationFailed {
                    operation: "read_json".to_string(),
                    cause: e.to_string(),
                })?;
            let full_content = format!("{first_line}{remaining}");
            let entries: Vec<ImportedEntry> = serde_json::from_str(&full_content)
                .map_err(|e| Error::InvalidInput(format!("Failed to parse JSON array: {e}")))?;
            self.buffer = entries.into();
        } else {
            let entry = self.parse_line(&first_line)?;
            self.buffer.push_back(entry);
        }

        Ok(())
    }
}

impl<R: BufRead> EntrySource for JsonEntrySource<R> {
    fn next(&mut self) -> Result<Option<ImportedEntry>> {
        if !self.started {
            self.detect_format()?;
        }

        if let Some(entry) = self.buffer.pop_front() {
            return Ok(Some(entry));
        }
        if self.array_mode {
            return Ok(None);
        }

        match self.next_line()? {
            Some(line) => self.parse_line(&line).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        self.array_mode.then_some(self.buffer.len())
    }
}
