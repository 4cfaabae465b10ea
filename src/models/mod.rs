//! Data models for lorecheck.

mod category;
mod conflict;
mod entry;

pub use category::Category;
pub use conflict::{Conflict, ConflictKind, Severity};
pub use entry::EntryRef;
