//! Blank formatting for masked cloze content.
//!
//! Content may contain backtick keep spans (`` `kept` ``) that are shown
//! verbatim while everything else is replaced by blanks.

use crate::config::ClozeConfig;
use html_escape::decode_html_entities;
use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static KEEP_SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^\n\r\x{2028}\x{2029}]+?`").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

const FIXED_BLANKS: usize = 3;
const FIXED_BLANKS_WITH_KEPT: usize = 2;

/// Whether `content` contains at least one backtick keep span.
pub fn has_keep_span(content: &str) -> bool {
    KEEP_SPAN_RE.is_match(content)
}

/// Remove the backticks around every keep span, leaving their text inline.
pub fn strip_keep_markers(content: &str) -> String {
    KEEP_SPAN_RE
        .replace_all(content, |caps: &regex::Captures| {
            let span = &caps[0];
            span[1..span.len() - 1].to_string()
        })
        .into_owned()
}

/// Blanks standing in for `content` in a masked cloze.
///
/// Without keep spans this is either same-length blanks or a fixed three
/// characters. With keep spans, kept text is inlined and every other
/// non-empty segment becomes same-length blanks or a fixed two characters.
pub fn format_blanks(content: &str, config: &ClozeConfig) -> String {
    let segments = split_keeping(&KEEP_SPAN_RE, content);

    if segments.len() == 1 {
        return if config.replace_same_length {
            same_length_blanks(content, config)
        } else {
            config.replace_char.repeat(FIXED_BLANKS)
        };
    }

    let mut out = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i % 2 == 1 {
            out.push_str(&segment[1..segment.len() - 1]);
        } else if !segment.is_empty() {
            if config.replace_same_length {
                out.push_str(&same_length_blanks(segment, config));
            } else {
                out.push_str(&config.replace_char.repeat(FIXED_BLANKS_WITH_KEPT));
            }
        }
    }
    out
}

/// Replace every character with the replace character, preserving whitespace
/// and keep-pattern matches. Combining diacritics do not count towards length.
pub fn same_length_blanks(content: &str, config: &ClozeConfig) -> String {
    let text = if content.contains('<') {
        html_to_text(content)
    } else {
        content.to_string()
    };
    let text: String = text.nfd().filter(|c| !is_combining_diacritic(*c)).collect();

    let mut out = String::new();
    for (i, segment) in split_keeping(config.blank_split(), &text).iter().enumerate() {
        if i % 2 == 0 {
            out.push_str(&config.replace_char.repeat(segment.chars().count()));
        } else {
            out.push_str(segment);
        }
    }
    out
}

/// Plain text of an HTML fragment: tags dropped, entities decoded.
pub fn html_to_text(html: &str) -> String {
    let stripped = TAG_RE.replace_all(html, "");
    decode_html_entities(&stripped).into_owned()
}

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

/// Split on `re`, keeping matches: even indices are the text between
/// matches, odd indices the matches themselves.
fn split_keeping<'a>(re: &Regex, text: &'a str) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        parts.push(&text[last..m.start()]);
        parts.push(m.as_str());
        last = m.end();
    }
    parts.push(&text[last..]);
    parts
}
