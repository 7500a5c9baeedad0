//! Render pass: scan, decide, assemble.

use crate::config::{ClozeConfig, ClozeOptions, ATTR_CARD};
use crate::error::Result;
use crate::policy::decide;
use crate::scanner::{current_cloze_number, scan};
use crate::types::Side;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Range;

/// Class added to the host element once rendering has run.
pub const SHOW_CLASS: &str = "show";

/// Result of rendering an HTML string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOutcome {
    pub html: String,
    /// Cloze being tested, if the card identifier named one.
    pub current_cloze: Option<u32>,
    /// Number of markers substituted.
    pub markers: usize,
}

/// Render `html` for `side` of the card identified by `card`.
///
/// When the card identifier carries no cloze number the HTML is returned
/// unchanged.
pub fn render_html(html: &str, card: &str, side: Side, config: &ClozeConfig) -> RenderOutcome {
    let Some(current) = current_cloze_number(card) else {
        tracing::debug!(card, "no cloze number in card identifier, skipping substitution");
        return RenderOutcome {
            html: html.to_string(),
            current_cloze: None,
            markers: 0,
        };
    };

    let replacements: Vec<(Range<usize>, String)> = scan(html)
        .into_iter()
        .map(|marker| {
            let decision = decide(&marker, config, current, side);
            let replacement = decision.apply(&marker, config);
            (marker.span, replacement)
        })
        .collect();

    tracing::debug!(current, markers = replacements.len(), ?side, "rendered cloze markers");

    RenderOutcome {
        html: assemble(html, &replacements),
        current_cloze: Some(current),
        markers: replacements.len(),
    }
}

/// Splice `replacements` into `html`. Spans must be ascending and disjoint.
pub fn assemble(html: &str, replacements: &[(Range<usize>, String)]) -> String {
    let mut out = String::with_capacity(html.len());
    let mut last = 0;
    for (span, replacement) in replacements {
        out.push_str(&html[last..span.start]);
        out.push_str(replacement);
        last = span.end;
    }
    out.push_str(&html[last..]);
    out
}

/// An element the renderer reads its configuration from and rewrites.
pub trait ClozeHost {
    fn attribute(&self, name: &str) -> Option<String>;

    fn inner_html(&self) -> String;

    fn set_inner_html(&mut self, html: String);

    fn add_class(&mut self, class: &str);
}

/// Render a host element in place and mark it shown.
///
/// Configuration errors are returned before the element is touched.
pub fn render_element<H: ClozeHost>(host: &mut H, side: Side) -> Result<RenderOutcome> {
    let options = ClozeOptions::from_attributes(|name| host.attribute(name));
    let config = ClozeConfig::resolve(&options)?;
    let card = host.attribute(ATTR_CARD).unwrap_or_default();

    let outcome = render_html(&host.inner_html(), &card, side, &config);
    if outcome.current_cloze.is_some() {
        host.set_inner_html(outcome.html.clone());
    }
    host.add_class(SHOW_CLASS);

    Ok(outcome)
}

/// In-memory element with attributes, inner HTML, and a class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClozeElement {
    pub attributes: BTreeMap<String, String>,
    pub inner_html: String,
    pub classes: Vec<String>,
}

impl ClozeElement {
    pub fn new(inner_html: impl Into<String>) -> Self {
        Self {
            inner_html: inner_html.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl ClozeHost for ClozeElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn inner_html(&self) -> String {
        self.inner_html.clone()
    }

    fn set_inner_html(&mut self, html: String) {
        self.inner_html = html;
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ATTR_KEEP_REGEX, ATTR_REPLACE_SAME_LENGTH, ATTR_SHOW_BEFORE};
    use crate::error::ClozeError;
    use pretty_assertions::assert_eq;

    fn defaults() -> ClozeConfig {
        ClozeConfig::resolve(&ClozeOptions::default()).unwrap()
    }

    #[test]
    fn front_masks_current_with_hint() {
        let outcome = render_html(
            "The capital of France is ((c2::Paris::capital)).",
            "Card 2",
            Side::Front,
            &defaults(),
        );
        assert_eq!(
            outcome.html,
            "The capital of France is <span class=\"current-cloze\">[capital]</span>."
        );
        assert!(!outcome.html.contains("Paris"));
        assert_eq!(outcome.current_cloze, Some(2));
        assert_eq!(outcome.markers, 1);
    }

    #[test]
    fn front_reveals_earlier_clozes_with_show_all() {
        let outcome = render_html(
            "((c1::`Ma`drid)) and ((c2::Lisbon))",
            "Card 2",
            Side::Front,
            &defaults(),
        );
        assert_eq!(
            outcome.html,
            "Madrid and <span class=\"current-cloze\">[...]</span>"
        );
    }

    #[test]
    fn back_reveals_all_clozes() {
        let outcome = render_html(
            "((c1::Tokyo)) is the capital of ((c2::Japan))",
            "Card 1",
            Side::Back,
            &defaults(),
        );
        assert_eq!(
            outcome.html,
            "<span class=\"current-cloze\">Tokyo</span> is the capital of Japan"
        );
        assert!(!outcome.html.contains("..."));
    }

    #[test]
    fn other_clozes_masked_outside_window() {
        let config = ClozeConfig::resolve(&ClozeOptions {
            show_before: Some("none".into()),
            show_after: Some("1".into()),
            ..Default::default()
        })
        .unwrap();
        let outcome = render_html(
            "((c1::one)) ((c2::two)) ((c3::three)) ((c4::four))",
            "Card 2",
            Side::Front,
            &config,
        );
        assert_eq!(
            outcome.html,
            "<span class=\"other-cloze\">[...]</span> \
             <span class=\"current-cloze\">[...]</span> \
             three \
             <span class=\"other-cloze\">[...]</span>"
        );
    }

    #[test]
    fn unparseable_card_leaves_html_untouched() {
        let html = "((c1::Paris))";
        let outcome = render_html(html, "Card", Side::Front, &defaults());
        assert_eq!(outcome.html, html);
        assert_eq!(outcome.current_cloze, None);
        assert_eq!(outcome.markers, 0);
    }

    #[test]
    fn malformed_markers_pass_through() {
        let html = "((cx::a)) ((c1::b ((c1::ok))";
        let outcome = render_html(html, "Card 1", Side::Back, &defaults());
        assert_eq!(outcome.markers, 1);
        assert!(outcome.html.starts_with("((cx::a)) "));
    }

    #[test]
    fn assemble_splices_in_order() {
        let html = "a XX b YY c";
        let out = assemble(html, &[(2..4, "1".into()), (7..9, "22".into())]);
        assert_eq!(out, "a 1 b 22 c");
        assert_eq!(assemble(html, &[]), html);
    }

    #[test]
    fn render_element_rewrites_and_shows() {
        let mut element = ClozeElement::new("I am ((c1::very)) ((c2::hungry)).")
            .with_attribute(ATTR_CARD, "Card 1")
            .with_attribute(ATTR_REPLACE_SAME_LENGTH, "true")
            .with_attribute(ATTR_SHOW_BEFORE, "none");

        let outcome = render_element(&mut element, Side::Front).unwrap();
        assert_eq!(outcome.markers, 2);
        assert_eq!(
            element.inner_html,
            "I am <span class=\"current-cloze\">[....]</span> hungry."
        );
        assert!(element.has_class(SHOW_CLASS));
    }

    #[test]
    fn render_element_without_card_still_shows() {
        let mut element = ClozeElement::new("((c1::x))");
        let outcome = render_element(&mut element, Side::Front).unwrap();
        assert_eq!(outcome.current_cloze, None);
        assert_eq!(element.inner_html, "((c1::x))");
        assert_eq!(element.classes, vec![SHOW_CLASS.to_string()]);
    }

    #[test]
    fn render_element_config_error_leaves_element_alone() {
        let mut element = ClozeElement::new("((c1::x))")
            .with_attribute(ATTR_CARD, "Card 1")
            .with_attribute(ATTR_KEEP_REGEX, "(");
        let result = render_element(&mut element, Side::Front);
        assert!(matches!(result, Err(ClozeError::InvalidKeepPattern { .. })));
        assert_eq!(element.inner_html, "((c1::x))");
        assert!(element.classes.is_empty());
    }
}
