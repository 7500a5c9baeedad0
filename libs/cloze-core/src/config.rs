//! Rendering configuration.
//!
//! Options arrive as raw attribute strings ([`ClozeOptions`]) and are resolved
//! once into an immutable [`ClozeConfig`] with the documented defaults applied.

use crate::error::{ClozeError, Result};
use crate::template::Templates;
use crate::types::ShowValue;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const ATTR_CARD: &str = "data-card";
pub const ATTR_SHOW_BEFORE: &str = "data-cloze-show-before";
pub const ATTR_SHOW_AFTER: &str = "data-cloze-show-after";
pub const ATTR_REPLACE_CHAR: &str = "data-cloze-replace-char";
pub const ATTR_REPLACE_SAME_LENGTH: &str = "data-cloze-replace-same-length";
pub const ATTR_ALWAYS_SHOW_BLANKS: &str = "data-cloze-always-show-blanks";
pub const ATTR_BLANKS_FORMAT: &str = "data-cloze-blanks-format";
pub const ATTR_HINT_FORMAT: &str = "data-cloze-hint-format";
pub const ATTR_BLANKS_AND_HINT_FORMAT: &str = "data-cloze-blanks-and-hint-format";
pub const ATTR_KEEP_REGEX: &str = "data-cloze-keep-regex";

pub const DEFAULT_REPLACE_CHAR: &str = ".";
pub const DEFAULT_BLANKS_FORMAT: &str = "[{blanks}]";
pub const DEFAULT_HINT_FORMAT: &str = "[{hint}]";
pub const DEFAULT_BLANKS_AND_HINT_FORMAT: &str = "[{blanks}|{hint}]";
pub const DEFAULT_KEEP_REGEX: &str = "[!,.:;?—–…]";

/// Raw, unresolved options as read from element attributes.
///
/// Every field is optional; missing or empty values fall back to defaults
/// when resolved. `keep_regex` is the exception: an empty pattern is used as is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClozeOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_char: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace_same_length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub always_show_blanks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blanks_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blanks_and_hint_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_regex: Option<String>,
}

impl ClozeOptions {
    /// Read every option through an attribute lookup.
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            show_before: lookup(ATTR_SHOW_BEFORE),
            show_after: lookup(ATTR_SHOW_AFTER),
            replace_char: lookup(ATTR_REPLACE_CHAR),
            replace_same_length: lookup(ATTR_REPLACE_SAME_LENGTH),
            always_show_blanks: lookup(ATTR_ALWAYS_SHOW_BLANKS),
            blanks_format: lookup(ATTR_BLANKS_FORMAT),
            hint_format: lookup(ATTR_HINT_FORMAT),
            blanks_and_hint_format: lookup(ATTR_BLANKS_AND_HINT_FORMAT),
            keep_regex: lookup(ATTR_KEEP_REGEX),
        }
    }
}

/// Resolved, immutable configuration for one render.
#[derive(Debug, Clone)]
pub struct ClozeConfig {
    pub show_before: ShowValue,
    pub show_after: ShowValue,
    pub replace_char: String,
    pub replace_same_length: bool,
    pub always_show_blanks: bool,
    pub templates: Templates,
    keep_regex: Regex,
    blank_split: Regex,
}

impl ClozeConfig {
    /// Apply defaults and compile patterns and templates.
    pub fn resolve(options: &ClozeOptions) -> Result<Self> {
        let keep_source = options.keep_regex.as_deref().unwrap_or(DEFAULT_KEEP_REGEX);
        let keep_regex = compile_keep(keep_source, keep_source)?;
        let blank_split = compile_keep(&format!(r"\s+|(?:{keep_source})"), keep_source)?;

        let templates = Templates::parse(
            or_default(&options.blanks_format, DEFAULT_BLANKS_FORMAT),
            or_default(&options.hint_format, DEFAULT_HINT_FORMAT),
            or_default(&options.blanks_and_hint_format, DEFAULT_BLANKS_AND_HINT_FORMAT),
        )?;

        Ok(Self {
            show_before: ShowValue::parse(or_default(&options.show_before, "all")),
            show_after: ShowValue::parse(or_default(&options.show_after, "all")),
            replace_char: or_default(&options.replace_char, DEFAULT_REPLACE_CHAR).to_string(),
            replace_same_length: is_true(&options.replace_same_length),
            always_show_blanks: is_true(&options.always_show_blanks),
            templates,
            keep_regex,
            blank_split,
        })
    }

    /// Pattern for substrings never replaced by blanks.
    pub fn keep_regex(&self) -> &Regex {
        &self.keep_regex
    }

    /// Whitespace runs or keep-pattern matches, the separators preserved when
    /// blanking at the same length.
    pub(crate) fn blank_split(&self) -> &Regex {
        &self.blank_split
    }
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

fn is_true(value: &Option<String>) -> bool {
    value.as_deref() == Some("true")
}

fn compile_keep(regex: &str, pattern: &str) -> Result<Regex> {
    Regex::new(regex).map_err(|source| ClozeError::InvalidKeepPattern {
        pattern: pattern.to_string(),
        source,
    })
}
