//! Name normalization for conflict comparison.

/// Normalizes a lore name for comparison.
///
/// Normalization steps:
/// 1. Convert to lowercase
/// 2. Drop every character that is not an ASCII letter, ASCII digit, or
///    whitespace (accents, punctuation and emoji are removed, not folded)
/// 3. Trim leading/trailing whitespace
///
/// Interior whitespace is kept as-is, so `"Ember  Throne"` and
/// `"Ember Throne"` stay one edit apart. The result only contains
/// characters that survive every step, which makes the function idempotent.
///
/// # Example
///
/// ```rust
/// use lorecheck::services::conflict::normalize;
///
/// assert_eq!(normalize("  Kael'en, the Bold! "), "kaelen the bold");
/// assert_eq!(normalize("Ærwyn"), "rwyn");
/// assert_eq!(normalize(&normalize("Ærwyn")), normalize("Ærwyn"));
/// ```
#[must_use]
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}
