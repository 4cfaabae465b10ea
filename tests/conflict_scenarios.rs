//! Conflict detection scenarios.
//!
//! End-to-end checks of the detector through the public API:
//! - Exact, near-duplicate and overlap classification
//! - Threshold boundaries for short and long names
//! - Output cap and corpus ordering
//! - Empty input floors

// Integration tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use lorecheck::models::{ConflictKind, EntryRef, Severity};
use lorecheck::services::check_conflicts;
use lorecheck::services::conflict::{DetectorConfig, NameConflictDetector};
use test_case::test_case;

fn entry(id: &str, name: &str, category: &str) -> EntryRef {
    EntryRef::new(id, name, category)
}

// ============================================================================
// Almanac scenarios
// ============================================================================

#[test]
fn exact_duplicate_is_an_error() {
    let corpus = vec![entry("1", "Petronai", "characters")];

    let conflicts = check_conflicts("petronai", &corpus);

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].kind, ConflictKind::ExactDuplicate);
    assert_eq!(conflicts[0].severity, Severity::Error);
    assert!(conflicts[0].message.contains("Petronai"));
    assert!(conflicts[0].message.contains("characters"));
}

#[test]
fn one_letter_respelling_is_a_warning() {
    let corpus = vec![entry("1", "Kaelen", "characters")];

    let conflicts = check_conflicts("Kaelan", &corpus);

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].kind, ConflictKind::NearDuplicate);
    assert_eq!(conflicts[0].severity, Severity::Warning);
    assert!(conflicts[0].message.starts_with("Similar to"));
}

#[test]
fn contained_name_is_an_overlap() {
    let corpus = vec![entry("1", "Shadowfen Marsh", "locations")];

    let conflicts = check_conflicts("Shadowfen", &corpus);

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].kind, ConflictKind::NearDuplicate);
    assert_eq!(conflicts[0].severity, Severity::Warning);
    assert_eq!(
        conflicts[0].message,
        "Name overlaps with \"Shadowfen Marsh\" in locations"
    );
}

#[test]
fn output_is_capped_at_five_in_corpus_order() {
    let names = ["Ab", "Ac", "Ad", "Ae", "Af", "Ag", "Ah", "Ai"];
    let corpus: Vec<EntryRef> = names
        .iter()
        .enumerate()
        .map(|(i, name)| entry(&i.to_string(), name, "creatures"))
        .collect();

    let conflicts = check_conflicts("Aa", &corpus);

    let matched: Vec<&str> = conflicts.iter().map(|c| c.matched_name.as_str()).collect();
    assert_eq!(matched, vec!["Ab", "Ac", "Ad", "Ae", "Af"]);
}

#[test]
fn each_entry_is_evaluated_independently() {
    let corpus = vec![
        entry("1", "Ember Throne", "kingdoms"),
        entry("2", "Ember Thorne", "kingdoms"),
    ];

    let conflicts = check_conflicts("Ember Thorn", &corpus);

    assert_eq!(conflicts.len(), 2);
    assert_eq!(conflicts[0].matched_name, "Ember Throne");
    assert_eq!(conflicts[1].matched_name, "Ember Thorne");
    assert!(conflicts.iter().all(|c| c.kind == ConflictKind::NearDuplicate));
}

// ============================================================================
// Threshold boundaries
// ============================================================================

#[test_case("Kaelen", "Kxylen", true ; "six chars distance two flagged")]
#[test_case("Kaelen", "Kxyzen", false ; "six chars distance three ignored")]
#[test_case("Kaelena", "Kxyzena", true ; "seven chars distance three flagged")]
#[test_case("Ironwood", "Ixyzwood", true ; "eight chars distance three flagged")]
#[test_case("Ironwood", "Ixyzqood", false ; "eight chars distance four ignored")]
fn distance_threshold_depends_on_length(proposed: &str, existing: &str, flagged: bool) {
    let corpus = vec![entry("1", existing, "relics")];

    let conflicts = check_conflicts(proposed, &corpus);

    assert_eq!(!conflicts.is_empty(), flagged);
}

#[test_case("" ; "empty")]
#[test_case("   " ; "whitespace")]
#[test_case("K" ; "single char")]
#[test_case("  K  " ; "single char padded")]
#[test_case("!!" ; "punctuation only")]
fn degenerate_names_return_nothing(proposed: &str) {
    let corpus = vec![entry("1", "K", "characters"), entry("2", "Kaelen", "characters")];

    assert!(check_conflicts(proposed, &corpus).is_empty());
}

#[test]
fn empty_corpus_returns_nothing() {
    assert!(check_conflicts("Petronai", &[]).is_empty());
}

#[test]
fn exact_match_takes_precedence() {
    let corpus = vec![entry("1", "Petronai", "characters")];

    let conflicts = check_conflicts("  PETRONAI!  ", &corpus);

    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].kind, ConflictKind::ExactDuplicate);
}

#[test]
fn unrelated_names_are_clear() {
    let corpus = vec![
        entry("1", "Petronai", "characters"),
        entry("2", "Shadowfen Marsh", "locations"),
        entry("3", "Ember Throne", "kingdoms"),
    ];

    assert!(check_conflicts("Ironwood", &corpus).is_empty());
}

#[test]
fn configured_detector_changes_limits() {
    let corpus = vec![entry("1", "Kaelen", "characters")];
    let strict = NameConflictDetector::new(DetectorConfig::default().with_thresholds(0, 0));

    assert!(strict.check("Kaelan", &corpus).is_empty());
    assert_eq!(strict.check("Kaelen", &corpus).len(), 1);
}
