//! Name conflict detector.
//!
//! Classifies a proposed name against a corpus snapshot in three passes per
//! entry:
//! 1. **Exact**: normalized names are equal (error, no further checks)
//! 2. **Similar**: `0 < distance <= threshold` (warning)
//! 3. **Overlap**: one normalized name contains the other (warning, at most
//!    one conflict per entry name)
//!
//! Results keep corpus order and are truncated to the configured cap.

use crate::models::{Conflict, ConflictKind, EntryRef};
use std::time::Instant;
use tracing::instrument;

use super::config::DetectorConfig;
use super::distance::{Levenshtein, StringDistance};
use super::normalize::normalize;

/// Detects naming conflicts between a proposed name and existing entries.
///
/// Pure with respect to its inputs: the corpus is passed in per call and
/// never retained, so one detector can be shared across threads.
///
/// # Example
///
/// ```rust
/// use lorecheck::models::{ConflictKind, EntryRef};
/// use lorecheck::services::conflict::NameConflictDetector;
///
/// let corpus = vec![EntryRef::new("1", "Kaelen", "characters")];
/// let detector = NameConflictDetector::default();
///
/// let conflicts = detector.check("Kaelan", &corpus);
/// assert_eq!(conflicts.len(), 1);
/// assert_eq!(conflicts[0].kind, ConflictKind::NearDuplicate);
/// ```
#[derive(Debug, Clone)]
pub struct NameConflictDetector<D: StringDistance = Levenshtein> {
    config: DetectorConfig,
    distance: D,
}

impl NameConflictDetector {
    /// Creates a detector using Levenshtein distance.
    #[must_use]
    pub const fn new(config: DetectorConfig) -> Self {
        Self {
            config,
            distance: Levenshtein,
        }
    }
}

impl Default for NameConflictDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

impl<D: StringDistance> NameConflictDetector<D> {
    /// Creates a detector with a custom distance metric.
    #[must_use]
    pub const fn with_distance(config: DetectorConfig, distance: D) -> Self {
        Self { config, distance }
    }

    /// Returns the detector configuration.
    #[must_use]
    pub const fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Checks `proposed_name` against `corpus`.
    ///
    /// Returns an empty list when the trimmed name is shorter than
    /// `min_name_length`, when it has no normalizable characters, or when
    /// the corpus is empty. Corpus entries whose names normalize to the
    /// empty string are skipped. Never fails.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    #[instrument(
        skip(self, proposed_name, corpus),
        fields(
            operation = "conflict_check",
            name_length = proposed_name.len(),
            corpus_size = corpus.len()
        )
    )]
    pub fn check(&self, proposed_name: &str, corpus: &[EntryRef]) -> Vec<Conflict> {
        let start = Instant::now();

        if proposed_name.trim().chars().count() < self.config.min_name_length {
            tracing::debug!("Proposed name below minimum length, skipping");
            return Vec::new();
        }

        let proposed = normalize(proposed_name);
        if proposed.is_empty() {
            tracing::debug!("Proposed name has no comparable characters, skipping");
            return Vec::new();
        }

        let proposed_len = proposed.chars().count();
        let threshold = self.config.threshold_for(proposed_len);
        let mut conflicts = Vec::new();

        for entry in corpus {
            let candidate = normalize(&entry.name);
            if candidate.is_empty() {
                continue;
            }

            if candidate == proposed {
                tracing::debug!(entry_id = %entry.id, "Exact duplicate");
                conflicts.push(Conflict::exact(entry));
                continue;
            }

            let candidate_len = candidate.chars().count();
            // Edit distance is at least the length difference.
            if candidate_len.abs_diff(proposed_len) <= threshold {
                let distance = self.distance.distance(&proposed, &candidate);
                if distance > 0 && distance <= threshold {
                    tracing::debug!(entry_id = %entry.id, distance, "Near duplicate");
                    conflicts.push(Conflict::similar(entry));
                }
            }

            if self.overlaps(&proposed, proposed_len, &candidate, candidate_len)
                && !conflicts.iter().any(|c| c.matched_name == entry.name)
            {
                tracing::debug!(entry_id = %entry.id, "Name overlap");
                conflicts.push(Conflict::overlap(entry));
            }
        }

        let total = conflicts.len();
        conflicts.truncate(self.config.max_conflicts);

        let duration_ms = start.elapsed().as_millis() as u64;
        record_check_metrics(&conflicts, duration_ms);
        tracing::debug!(
            total_matches = total,
            returned = conflicts.len(),
            threshold,
            duration_ms,
            "Conflict check complete"
        );

        conflicts
    }

    /// Returns true if one normalized name contains the other and both are
    /// long enough to make the overlap meaningful.
    fn overlaps(
        &self,
        proposed: &str,
        proposed_len: usize,
        candidate: &str,
        candidate_len: usize,
    ) -> bool {
        let min = self.config.min_overlap_length;
        proposed_len >= min
            && candidate_len >= min
            && (candidate.contains(proposed) || proposed.contains(candidate))
    }
}

/// Checks `proposed_name` against `corpus` with the default configuration.
///
/// # Example
///
/// ```rust
/// use lorecheck::models::{EntryRef, Severity};
/// use lorecheck::services::conflict::check_conflicts;
///
/// let corpus = vec![EntryRef::new("1", "Petronai", "characters")];
/// let conflicts = check_conflicts("petronai", &corpus);
///
/// assert_eq!(conflicts.len(), 1);
/// assert_eq!(conflicts[0].severity, Severity::Error);
/// assert!(check_conflicts("a", &corpus).is_empty());
/// ```
#[must_use]
pub fn check_conflicts(proposed_name: &str, corpus: &[EntryRef]) -> Vec<Conflict> {
    NameConflictDetector::default().check(proposed_name, corpus)
}

#[allow(clippy::cast_precision_loss)]
fn record_check_metrics(conflicts: &[Conflict], duration_ms: u64) {
    let result = if conflicts.is_empty() {
        "clear"
    } else {
        "conflicts"
    };
    metrics::counter!("lore_conflict_checks_total", "result" => result).increment(1);

    for kind in [ConflictKind::ExactDuplicate, ConflictKind::NearDuplicate] {
        let count = conflicts.iter().filter(|c| c.kind == kind).count() as u64;
        if count > 0 {
            metrics::counter!("lore_conflicts_total", "kind" => kind.as_str()).increment(count);
        }
    }

    metrics::histogram!("lore_conflict_check_duration_ms").record(duration_ms as f64);
}
