//! Proposal review before a new lore entry is submitted.
//!
//! Loads a corpus snapshot, runs the conflict detector and turns the
//! conflicts into an outcome the submission form can act on. A corpus that
//! fails to load yields [`ReviewOutcome::Unavailable`], never
//! [`ReviewOutcome::Clear`].

use serde::Serialize;
use std::fmt;
use tracing::instrument;

use crate::models::Conflict;
use crate::services::conflict::NameConflictDetector;
use crate::storage::{CategoryFailure, CorpusSnapshot, EntryCorpusProvider};

/// Policy for turning conflicts into an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionPolicy {
    /// Whether an exact duplicate blocks submission.
    pub block_on_exact: bool,
}

impl Default for SubmissionPolicy {
    fn default() -> Self {
        Self {
            block_on_exact: true,
        }
    }
}

/// Result of reviewing a proposed name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewOutcome {
    /// No conflicts found.
    Clear,
    /// Only advisory conflicts, or errors the policy lets through.
    Warned,
    /// An error-severity conflict blocks submission.
    Blocked,
    /// The corpus could not be loaded, so nothing was checked.
    Unavailable,
}

impl ReviewOutcome {
    /// Returns the outcome as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Warned => "warned",
            Self::Blocked => "blocked",
            Self::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for ReviewOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full review of a proposed name.
#[derive(Debug, Clone, Serialize)]
pub struct ProposalReview {
    /// The name as submitted.
    pub proposed_name: String,
    /// Overall outcome.
    pub outcome: ReviewOutcome,
    /// Conflicts in corpus order.
    pub conflicts: Vec<Conflict>,
    /// Number of entries checked against.
    pub corpus_size: usize,
    /// Categories missing from the check.
    pub failed_categories: Vec<CategoryFailure>,
    /// Why the check was unavailable, if it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable_reason: Option<String>,
}

impl ProposalReview {
    /// Returns true if submission should be refused.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.outcome == ReviewOutcome::Blocked
    }

    /// Returns true if the check ran on an incomplete corpus.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        !self.failed_categories.is_empty()
    }
}

/// Reviews proposed entry names against a corpus provider.
///
/// # Example
///
/// ```rust
/// use lorecheck::models::EntryRef;
/// use lorecheck::services::submission::{ProposalReviewer, ReviewOutcome};
/// use lorecheck::storage::InMemoryCorpus;
///
/// let corpus = InMemoryCorpus::new(vec![EntryRef::new("1", "Petronai", "characters")]);
/// let reviewer = ProposalReviewer::new(corpus);
///
/// assert_eq!(reviewer.review("Petronai").outcome, ReviewOutcome::Blocked);
/// assert_eq!(reviewer.review("Petrona").outcome, ReviewOutcome::Warned);
/// assert_eq!(reviewer.review("Ironwood").outcome, ReviewOutcome::Clear);
/// ```
pub struct ProposalReviewer<P: EntryCorpusProvider> {
    provider: P,
    detector: NameConflictDetector,
    policy: SubmissionPolicy,
}

impl<P: EntryCorpusProvider> ProposalReviewer<P> {
    /// Creates a reviewer with the default detector and policy.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            detector: NameConflictDetector::default(),
            policy: SubmissionPolicy::default(),
        }
    }

    /// Sets the detector.
    #[must_use]
    pub fn with_detector(mut self, detector: NameConflictDetector) -> Self {
        self.detector = detector;
        self
    }

    /// Sets the submission policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: SubmissionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Loads the corpus and reviews `proposed_name`.
    #[instrument(skip(self), fields(operation = "proposal_review", provider = %self.provider.describe()))]
    pub fn review(&self, proposed_name: &str) -> ProposalReview {
        match self.provider.load() {
            Ok(snapshot) => self.review_snapshot(proposed_name, &snapshot),
            Err(e) => {
                tracing::warn!(error = %e, "Corpus unavailable, conflict check skipped");
                metrics::counter!("lore_proposal_reviews_total", "outcome" => "unavailable")
                    .increment(1);
                ProposalReview {
                    proposed_name: proposed_name.to_string(),
                    outcome: ReviewOutcome::Unavailable,
                    conflicts: Vec::new(),
                    corpus_size: 0,
                    failed_categories: Vec::new(),
                    unavailable_reason: Some(e.to_string()),
                }
            },
        }
    }

    /// Reviews `proposed_name` against an already loaded snapshot.
    pub fn review_snapshot(&self, proposed_name: &str, snapshot: &CorpusSnapshot) -> ProposalReview {
        let conflicts = self.detector.check(proposed_name, &snapshot.entries);
        let outcome = self.classify(&conflicts);

        if snapshot.is_partial() {
            tracing::info!(
                failed = snapshot.failed.len(),
                "Reviewed against a partial corpus"
            );
        }
        metrics::counter!("lore_proposal_reviews_total", "outcome" => outcome.as_str())
            .increment(1);

        ProposalReview {
            proposed_name: proposed_name.to_string(),
            outcome,
            conflicts,
            corpus_size: snapshot.len(),
            failed_categories: snapshot.failed.clone(),
            unavailable_reason: None,
        }
    }

    fn classify(&self, conflicts: &[Conflict]) -> ReviewOutcome {
        if conflicts.is_empty() {
            ReviewOutcome::Clear
        } else if self.policy.block_on_exact && conflicts.iter().any(Conflict::is_error) {
            ReviewOutcome::Blocked
        } else {
            ReviewOutcome::Warned
        }
    }
}
