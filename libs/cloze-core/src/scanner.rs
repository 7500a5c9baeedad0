//! Marker scanner for cloze content.
//!
//! # Format
//! ```text
//! ((c1::Tokyo)) is the capital of ((c2::Japan::country)).
//! ((c3::`Ma`drid))
//! ```
//! Each marker carries a cloze number, its content, and an optional hint
//! after a second `::`. Backtick spans inside the content are kept verbatim
//! when the cloze is masked.

use crate::types::Marker;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

// Marker content never spans a line terminator.
static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\(c([0-9]+)::([^\n\r\x{2028}\x{2029}]+?\)*)\)\)").unwrap()
});
static CLOZE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\(c([0-9]+)::.+?\)\)").unwrap());
static CARD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9]+([0-9]+)$").unwrap());

/// Find every marker in `html`, left to right, non-overlapping.
///
/// Markers whose number does not fit in a `u32` are skipped and stay literal.
pub fn scan(html: &str) -> Vec<Marker> {
    MARKER_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let cloze_number = caps[1].parse::<u32>().ok()?;
            let (content, hint) = split_hint(&caps[2]);
            Some(Marker {
                span: whole.range(),
                cloze_number,
                content,
                hint,
            })
        })
        .collect()
}

/// Split marker content into content and hint.
///
/// Only exactly one `::` separator yields a hint; an empty hint counts as none.
fn split_hint(raw: &str) -> (String, Option<String>) {
    let parts: Vec<&str> = raw.split("::").collect();
    match parts.as_slice() {
        [content, hint] => {
            let hint = (!hint.is_empty()).then(|| hint.to_string());
            (content.to_string(), hint)
        }
        _ => (raw.to_string(), None),
    }
}

/// Current cloze number from a card identifier such as `Card 2` or
/// `ExpressionCloze12`.
///
/// The trailing digits must follow at least one non-digit character.
pub fn current_cloze_number(card: &str) -> Option<u32> {
    CARD_RE.captures(card)?[1].parse().ok()
}

/// Every cloze number referenced in `content`.
pub fn cloze_numbers(content: &str) -> BTreeSet<u32> {
    CLOZE_NUMBER_RE
        .captures_iter(content)
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}

/// Number for a new cloze: one past the highest in use, or the highest itself
/// when `reuse` is set. Starts at 1.
pub fn next_cloze_number(existing: &BTreeSet<u32>, reuse: bool) -> u32 {
    match existing.last() {
        Some(&max) if reuse => max,
        Some(&max) => max.saturating_add(1),
        None => 1,
    }
}

/// Opening and closing text of a marker for cloze `number`.
pub fn marker_delimiters(number: u32) -> (String, String) {
    (format!("((c{}::", number), "))".to_string())
}

/// Wrap `selection` in a marker for cloze `number`.
pub fn wrap_selection(selection: &str, number: u32) -> String {
    let (prefix, suffix) = marker_delimiters(number);
    format!("{}{}{}", prefix, selection, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_single_marker() {
        let markers = scan("The capital is ((c1::Paris)).");
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].cloze_number, 1);
        assert_eq!(markers[0].content, "Paris");
        assert_eq!(markers[0].hint, None);
        assert_eq!(markers[0].span, 15..28);
    }

    #[test]
    fn scan_marker_with_hint() {
        let markers = scan("((c2::Paris::capital))");
        assert_eq!(markers[0].cloze_number, 2);
        assert_eq!(markers[0].content, "Paris");
        assert_eq!(markers[0].hint.as_deref(), Some("capital"));
    }

    #[test]
    fn scan_multiple_separators_has_no_hint() {
        let markers = scan("((c1::a::b::c))");
        assert_eq!(markers[0].content, "a::b::c");
        assert_eq!(markers[0].hint, None);
    }

    #[test]
    fn scan_empty_hint_is_none() {
        let markers = scan("((c1::word::))");
        assert_eq!(markers[0].content, "word");
        assert_eq!(markers[0].hint, None);
    }

    #[test]
    fn scan_keeps_trailing_parens() {
        let markers = scan("((c1::f(x)))");
        assert_eq!(markers[0].content, "f(x)");
    }

    #[test]
    fn scan_multiple_markers_in_order() {
        let markers = scan("((c1::Tokyo)) is the capital of ((c2::Japan))");
        let numbers: Vec<u32> = markers.iter().map(|m| m.cloze_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(markers[1].content, "Japan");
    }

    #[test]
    fn scan_ignores_malformed_markers() {
        assert!(scan("((cx::word))").is_empty());
        assert!(scan("((c1::unterminated").is_empty());
        assert!(scan("(c1::single))").is_empty());
        assert!(scan("((c1::))").is_empty());
    }

    #[test]
    fn scan_does_not_cross_lines() {
        assert!(scan("((c1::first\nsecond))").is_empty());
        assert!(scan("((c1::first\rsecond))").is_empty());
        assert!(scan("((c1::first\u{2028}second))").is_empty());
        assert!(scan("((c1::first\u{2029}second))").is_empty());
        assert_eq!(scan("((c1::first\tsecond))").len(), 1);
    }

    #[test]
    fn parse_current_cloze_number() {
        assert_eq!(current_cloze_number("Card 3"), Some(3));
        assert_eq!(current_cloze_number("ExpressionCloze12"), Some(12));
        assert_eq!(current_cloze_number("12"), None);
        assert_eq!(current_cloze_number("Card"), None);
        assert_eq!(current_cloze_number(""), None);
        assert_eq!(current_cloze_number("Card 3a"), None);
    }

    #[test]
    fn collect_cloze_numbers() {
        let numbers = cloze_numbers("((c1::I)) ((c2::am)) ((c2::very)) hungry.");
        assert_eq!(numbers.into_iter().collect::<Vec<_>>(), vec![1, 2]);
        assert!(cloze_numbers("no clozes").is_empty());
    }

    #[test]
    fn allocate_next_number() {
        let existing: BTreeSet<u32> = [1, 3].into_iter().collect();
        assert_eq!(next_cloze_number(&existing, false), 4);
        assert_eq!(next_cloze_number(&existing, true), 3);
        assert_eq!(next_cloze_number(&BTreeSet::new(), false), 1);
        assert_eq!(next_cloze_number(&BTreeSet::new(), true), 1);
    }

    #[test]
    fn wrap_selection_in_marker() {
        assert_eq!(wrap_selection("hungry", 3), "((c3::hungry))");
        assert_eq!(
            marker_delimiters(3),
            ("((c3::".to_string(), "))".to_string())
        );
    }
}
