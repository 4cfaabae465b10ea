//! # Lorecheck
//!
//! Name-conflict detection for ThouArt lore almanacs.
//!
//! Before an author submits a new lore entry, lorecheck compares the
//! proposed name against every existing entry and reports exact duplicates,
//! near-identical spellings, and names that contain one another.
//!
//! ## Features
//!
//! - Normalized exact matching with error severity
//! - Edit-distance similarity with length-dependent thresholds
//! - Substring overlap for longer names
//! - Corpus providers for in-memory, single-file and per-category directories
//! - `[[reference]]` resolution for almanac body text
//!
//! ## Example
//!
//! ```rust
//! use lorecheck::models::{ConflictKind, EntryRef};
//! use lorecheck::services::check_conflicts;
//!
//! let corpus = vec![
//!     EntryRef::new("c1", "Petronai", "characters"),
//!     EntryRef::new("l1", "Shadowfen Marsh", "locations"),
//! ];
//!
//! let conflicts = check_conflicts("Petrona", &corpus);
//! assert_eq!(conflicts.len(), 1);
//! assert_eq!(conflicts[0].kind, ConflictKind::NearDuplicate);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

pub mod config;
pub mod io;
pub mod models;
pub mod observability;
pub mod services;
pub mod storage;

pub use config::LorecheckConfig;
pub use models::{Category, Conflict, ConflictKind, EntryRef, Severity};
pub use services::{NameConflictDetector, ProposalReviewer, ReviewOutcome, check_conflicts};
pub use storage::{CorpusSnapshot, EntryCorpusProvider};

/// Error type for lorecheck operations.
///
/// The conflict check itself never fails; errors come from loading corpora,
/// configuration and logging setup.
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Malformed corpus records, unknown formats, bad CLI input |
/// | `OperationFailed` | Filesystem I/O, config parsing, logging setup |
/// | `CorpusUnavailable` | A provider cannot produce any snapshot |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A corpus record has no name or no category
    /// - A file extension or `--format` value is not recognized
    /// - A CSV corpus lacks a name column
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },

    /// The entry corpus could not be loaded.
    ///
    /// Callers must not treat this as "no conflicts".
    #[error("corpus unavailable: {0}")]
    CorpusUnavailable(String),
}

/// Result type alias for lorecheck operations.
pub type Result<T> = std::result::Result<T, Error>;
