//! Name conflict detection for proposed lore entries.
//!
//! Advisory check run before a new almanac entry is submitted. A proposed
//! name is compared against every existing entry:
//! 1. **Exact duplicate**: normalized names are equal (`error`)
//! 2. **Near duplicate**: Levenshtein distance within a length-dependent
//!    threshold (`warning`)
//! 3. **Overlap**: one normalized name contains the other (`warning`)
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                  NameConflictDetector                     │
//! │  ┌────────────┐  ┌────────────────┐  ┌─────────────────┐  │
//! │  │ normalize  │  │ StringDistance │  │ DetectorConfig  │  │
//! │  │            │  │                │  │                 │  │
//! │  │ lowercase, │  │ Levenshtein    │  │ thresholds,     │  │
//! │  │ [a-z0-9\s] │  │ (swappable)    │  │ floor, cap      │  │
//! │  └────────────┘  └────────────────┘  └─────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use lorecheck::models::EntryRef;
//! use lorecheck::services::conflict::check_conflicts;
//!
//! let corpus = vec![
//!     EntryRef::new("1", "Ember Throne", "kingdoms"),
//!     EntryRef::new("2", "Ember Thorne", "kingdoms"),
//! ];
//!
//! let conflicts = check_conflicts("Ember Thorn", &corpus);
//! assert_eq!(conflicts.len(), 2);
//! ```

mod config;
mod detector;
mod distance;
mod normalize;

pub use config::DetectorConfig;
pub use detector::{NameConflictDetector, check_conflicts};
pub use distance::{Levenshtein, StringDistance, levenshtein};
pub use normalize::normalize;
