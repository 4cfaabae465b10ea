//! Naming conflict records.
//!
//! A [`Conflict`] is produced per matching corpus entry by the conflict
//! detector and discarded once shown to the submitter.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::EntryRef;

/// How a proposed name collides with an existing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    /// Normalized names are identical.
    ExactDuplicate,
    /// Names are within edit distance or one contains the other.
    NearDuplicate,
}

impl ConflictKind {
    /// Returns the kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ExactDuplicate => "exact_duplicate",
            Self::NearDuplicate => "near_duplicate",
        }
    }

    /// Returns the severity this kind is reported with.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::ExactDuplicate => Severity::Error,
            Self::NearDuplicate => Severity::Warning,
        }
    }
}

impl fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Severity of a conflict.
///
/// Whether an `Error` blocks submission is a policy decision of the caller;
/// `Warning` is always advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Advisory hint.
    Warning,
    /// Likely duplicate of an existing entry.
    Error,
}

impl Severity {
    /// Returns the severity as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A potential naming conflict against one existing entry.
///
/// # Example
///
/// ```rust
/// use lorecheck::models::{Conflict, ConflictKind, EntryRef, Severity};
///
/// let entry = EntryRef::new("1", "Petronai", "characters");
/// let conflict = Conflict::exact(&entry);
///
/// assert_eq!(conflict.kind, ConflictKind::ExactDuplicate);
/// assert_eq!(conflict.severity, Severity::Error);
/// assert_eq!(conflict.message, "\"Petronai\" already exists in characters");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Kind of collision.
    pub kind: ConflictKind,
    /// Display name of the existing entry.
    pub matched_name: String,
    /// Category of the existing entry.
    pub matched_category: String,
    /// Severity derived from the kind.
    pub severity: Severity,
    /// Human-readable explanation.
    pub message: String,
}

impl Conflict {
    /// Exact duplicate of `entry`.
    #[must_use]
    pub fn exact(entry: &EntryRef) -> Self {
        Self::new(
            ConflictKind::ExactDuplicate,
            entry,
            format!("\"{}\" already exists in {}", entry.name, entry.category),
        )
    }

    /// Within edit distance of `entry`.
    #[must_use]
    pub fn similar(entry: &EntryRef) -> Self {
        Self::new(
            ConflictKind::NearDuplicate,
            entry,
            format!("Similar to \"{}\" in {}", entry.name, entry.category),
        )
    }

    /// One name contains the other.
    #[must_use]
    pub fn overlap(entry: &EntryRef) -> Self {
        Self::new(
            ConflictKind::NearDuplicate,
            entry,
            format!("Name overlaps with \"{}\" in {}", entry.name, entry.category),
        )
    }

    fn new(kind: ConflictKind, entry: &EntryRef, message: String) -> Self {
        Self {
            kind,
            matched_name: entry.name.clone(),
            matched_category: entry.category.clone(),
            severity: kind.severity(),
            message,
        }
    }

    /// Returns true if this conflict has error severity.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}
