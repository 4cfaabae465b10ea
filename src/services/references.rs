//! Almanac `[[reference]]` links.
//!
//! Entry bodies link to other entries inline with `[[Name]]` or
//! `[[Name|shown text]]`. This module splits a body into text runs and
//! references and resolves references against a corpus snapshot by
//! normalized name.

use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::EntryRef;
use crate::services::conflict::normalize;

/// `[[target]]` or `[[target|label]]`, no nesting, single line.
static REFERENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\[\]\n]*)\]\]").unwrap_or_else(|_| unreachable!()));

/// A piece of parsed entry text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    /// Literal text.
    Text {
        /// The text run.
        text: String,
    },
    /// An inline reference to another entry.
    Reference {
        /// Name being referenced.
        target: String,
        /// Text to show instead of the target, if given.
        label: Option<String>,
    },
}

/// A segment after resolution against a corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolvedSegment {
    /// Literal text.
    Text {
        /// The text run.
        text: String,
    },
    /// A reference, with the matched entry when one exists.
    Link {
        /// Name being referenced.
        target: String,
        /// Text to show instead of the target, if given.
        label: Option<String>,
        /// The matched corpus entry, `None` for dangling references.
        entry: Option<EntryRef>,
    },
}

impl ResolvedSegment {
    /// Returns the text a reader sees for this segment.
    #[must_use]
    pub fn display_text(&self) -> &str {
        match self {
            Self::Text { text } => text,
            Self::Link { target, label, .. } => label.as_deref().unwrap_or(target),
        }
    }

    /// Returns true for a reference that matched no entry.
    #[must_use]
    pub const fn is_dangling(&self) -> bool {
        matches!(self, Self::Link { entry: None, .. })
    }
}

/// Splits `text` into literal runs and references.
///
/// Brackets with an empty target (`[[ ]]`, `[[|label]]`) stay literal text.
/// Adjacent literal runs are merged.
///
/// # Example
///
/// ```rust
/// use lorecheck::services::references::{Segment, parse_references};
///
/// let segments = parse_references("Born in [[Shadowfen Marsh|the marsh]].");
/// assert_eq!(segments.len(), 3);
/// assert_eq!(
///     segments[1],
///     Segment::Reference {
///         target: "Shadowfen Marsh".to_string(),
///         label: Some("the marsh".to_string()),
///     }
/// );
/// ```
#[must_use]
pub fn parse_references(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for captures in REFERENCE_PATTERN.captures_iter(text) {
        let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
            continue;
        };

        push_text(&mut segments, &text[cursor..whole.start()]);
        cursor = whole.end();

        let (target, label) = match inner.as_str().split_once('|') {
            Some((target, label)) => (target.trim(), Some(label.trim())),
            None => (inner.as_str().trim(), None),
        };

        if target.is_empty() {
            push_text(&mut segments, whole.as_str());
            continue;
        }

        segments.push(Segment::Reference {
            target: target.to_string(),
            label: label.filter(|l| !l.is_empty()).map(String::from),
        });
    }

    push_text(&mut segments, &text[cursor..]);
    segments
}

/// Parses `text` and resolves every reference against `corpus`.
///
/// A reference matches the first corpus entry (in corpus order) whose
/// normalized name equals the normalized target.
#[must_use]
pub fn resolve_references(text: &str, corpus: &[EntryRef]) -> Vec<ResolvedSegment> {
    let mut by_name: HashMap<String, &EntryRef> = HashMap::new();
    for entry in corpus {
        let key = normalize(&entry.name);
        if !key.is_empty() {
            by_name.entry(key).or_insert(entry);
        }
    }

    let resolved: Vec<ResolvedSegment> = parse_references(text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text { text } => ResolvedSegment::Text { text },
            Segment::Reference { target, label } => {
                let entry = by_name.get(&normalize(&target)).map(|e| (*e).clone());
                ResolvedSegment::Link {
                    target,
                    label,
                    entry,
                }
            },
        })
        .collect();

    let dangling = resolved.iter().filter(|s| s.is_dangling()).count();
    if dangling > 0 {
        tracing::debug!(dangling, "Unresolved almanac references");
    }

    resolved
}

/// Returns the distinct reference targets in first-seen order.
///
/// Targets are de-duplicated by normalized name; the first spelling wins.
#[must_use]
pub fn extract_targets(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    parse_references(text)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Reference { target, .. } => Some(target),
            Segment::Text { .. } => None,
        })
        .filter(|target| seen.insert(normalize(target)))
        .collect()
}

fn push_text(segments: &mut Vec<Segment>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Segment::Text { text: last }) = segments.last_mut() {
        last.push_str(text);
    } else {
        segments.push(Segment::Text {
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Segment {
        Segment::Text {
            text: s.to_string(),
        }
    }

    fn reference(target: &str, label: Option<&str>) -> Segment {
        Segment::Reference {
            target: target.to_string(),
            label: label.map(String::from),
        }
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse_references("No links here."), vec![text("No links here.")]);
        assert!(parse_references("").is_empty());
    }

    #[test]
    fn test_single_reference() {
        assert_eq!(
            parse_references("Ruled by [[Petronai]] for a century"),
            vec![
                text("Ruled by "),
                reference("Petronai", None),
                text(" for a century"),
            ]
        );
    }

    #[test]
    fn test_label_and_whitespace() {
        assert_eq!(
            parse_references("[[ Ember Throne | the throne ]]"),
            vec![reference("Ember Throne", Some("the throne"))]
        );
        assert_eq!(
            parse_references("[[Ember Throne|]]"),
            vec![reference("Ember Throne", None)]
        );
    }

    #[test]
    fn test_empty_target_stays_literal() {
        assert_eq!(
            parse_references("a [[ ]] b [[|x]] c"),
            vec![text("a [[ ]] b [[|x]] c")]
        );
    }

    #[test]
    fn test_adjacent_references() {
        assert_eq!(
            parse_references("[[Kaelen]][[Orrin]]"),
            vec![reference("Kaelen", None), reference("Orrin", None)]
        );
    }

    #[test]
    fn test_unclosed_brackets() {
        assert_eq!(
            parse_references("see [[Kaelen and more"),
            vec![text("see [[Kaelen and more")]
        );
    }

    #[test]
    fn test_resolve() {
        let corpus = vec![
            EntryRef::new("1", "Shadowfen Marsh", "locations"),
            EntryRef::new("2", "Petronai", "characters"),
        ];
        let resolved = resolve_references(
            "[[petronai]] fled to [[Shadowfen Marsh|the marsh]] past [[Nowhere]].",
            &corpus,
        );

        assert_eq!(resolved.len(), 6);
        match &resolved[0] {
            ResolvedSegment::Link { entry, .. } => {
                assert_eq!(entry.as_ref().map(|e| e.id.as_str()), Some("2"));
            },
            other => panic!("expected link, got {other:?}"),
        }
        assert_eq!(resolved[2].display_text(), "the marsh");
        assert!(!resolved[2].is_dangling());
        assert!(resolved[4].is_dangling());
        assert_eq!(resolved[4].display_text(), "Nowhere");
    }

    #[test]
    fn test_resolve_first_match_wins() {
        let corpus = vec![
            EntryRef::new("1", "Ironwood", "locations"),
            EntryRef::new("2", "Ironwood", "relics"),
        ];
        let resolved = resolve_references("[[Ironwood]]", &corpus);
        match &resolved[0] {
            ResolvedSegment::Link {
                entry: Some(entry), ..
            } => assert_eq!(entry.category, "locations"),
            other => panic!("expected resolved link, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_targets_distinct() {
        let targets = extract_targets("[[Kaelen]] met [[Orrin]], then [[kaelen]] again.");
        assert_eq!(targets, vec!["Kaelen".to_string(), "Orrin".to_string()]);
    }
}
