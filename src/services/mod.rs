//! Business logic services.
//!
//! - [`conflict`]: near-duplicate name detection
//! - [`references`]: almanac `[[reference]]` parsing and resolution
//! - [`submission`]: proposal review on top of a corpus provider

pub mod conflict;
pub mod references;
pub mod submission;

pub use conflict::{NameConflictDetector, check_conflicts};
pub use references::{ResolvedSegment, Segment, extract_targets, parse_references, resolve_references};
pub use submission::{ProposalReview, ProposalReviewer, ReviewOutcome, SubmissionPolicy};
