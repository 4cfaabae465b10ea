//! String distance metrics.
//!
//! The detector depends on [`StringDistance`] rather than on Levenshtein
//! directly, so a phonetic or token-based metric can replace it without
//! touching the threshold policy.

/// A metric over strings returning an edit-style distance.
///
/// Implementations must return `0` for equal inputs.
pub trait StringDistance: Send + Sync {
    /// Computes the distance between `a` and `b`.
    fn distance(&self, a: &str, b: &str) -> usize;
}

/// Levenshtein edit distance (unit-cost insert, delete, substitute).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Levenshtein;

impl StringDistance for Levenshtein {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein(a, b)
    }
}

/// Computes the Levenshtein distance between two strings.
///
/// Operates on Unicode scalar values. Evaluates the standard
/// `(len(b) + 1) x (len(a) + 1)` recurrence one row at a time, so memory is
/// `O(len(a))` however long the inputs are.
///
/// # Example
///
/// ```rust
/// use lorecheck::services::conflict::levenshtein;
///
/// assert_eq!(levenshtein("kaelen", "kaelan"), 1);
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
#[must_use]
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    if a.is_empty() {
        return b.chars().count();
    }

    // row[j] holds the distance between a[..j] and the prefix of b seen so far.
    let mut row: Vec<usize> = (0..=a.len()).collect();

    for (i, b_char) in b.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, a_char) in a.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(*a_char != b_char);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    row[a.len()]
}
