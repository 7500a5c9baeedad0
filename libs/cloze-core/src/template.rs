//! Format templates for masked clozes.
//!
//! A template is literal text with `{blanks}` and/or `{hint}` placeholders.
//! Templates are parsed once when the configuration is resolved, and a
//! template may only reference the tokens its variant actually supplies.

use crate::error::{ClozeError, Result};
use regex::Regex;
use std::sync::LazyLock;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([a-z]+)\}").unwrap());

/// Text produced for a masked cloze, before it is formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MaskedText {
    Blanks(String),
    Hint(String),
    BlanksAndHint(String, String),
}

/// Which of the three templates a [`Template`] was parsed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Blanks,
    Hint,
    BlanksAndHint,
}

impl TemplateKind {
    /// Attribute-style name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Blanks => "blanks-format",
            Self::Hint => "hint-format",
            Self::BlanksAndHint => "blanks-and-hint-format",
        }
    }

    fn token(self, name: &str) -> Option<Part> {
        match (self, name) {
            (Self::Blanks | Self::BlanksAndHint, "blanks") => Some(Part::Blanks),
            (Self::Hint | Self::BlanksAndHint, "hint") => Some(Part::Hint),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Literal(String),
    Blanks,
    Hint,
}

/// A parsed format template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    parts: Vec<Part>,
}

impl Template {
    /// Parse `source`, rejecting any `{token}` the kind does not supply.
    pub fn parse(kind: TemplateKind, source: &str) -> Result<Self> {
        let mut parts = Vec::new();
        let mut last = 0;

        for caps in TOKEN_RE.captures_iter(source) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let name = name.as_str();
            let part = kind.token(name).ok_or_else(|| ClozeError::UnknownTemplateToken {
                template: kind.name(),
                token: name.to_string(),
            })?;

            if whole.start() > last {
                parts.push(Part::Literal(source[last..whole.start()].to_string()));
            }
            parts.push(part);
            last = whole.end();
        }

        if last < source.len() {
            parts.push(Part::Literal(source[last..].to_string()));
        }

        Ok(Self { parts })
    }

    fn fill(&self, blanks: &str, hint: &str) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Literal(text) => out.push_str(text),
                Part::Blanks => out.push_str(blanks),
                Part::Hint => out.push_str(hint),
            }
        }
        out
    }
}

/// The three templates, one per [`MaskedText`] variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    pub blanks: Template,
    pub hint: Template,
    pub blanks_and_hint: Template,
}

impl Templates {
    pub fn parse(blanks: &str, hint: &str, blanks_and_hint: &str) -> Result<Self> {
        Ok(Self {
            blanks: Template::parse(TemplateKind::Blanks, blanks)?,
            hint: Template::parse(TemplateKind::Hint, hint)?,
            blanks_and_hint: Template::parse(TemplateKind::BlanksAndHint, blanks_and_hint)?,
        })
    }

    /// Format masked text with the template matching its variant.
    pub fn format(&self, text: &MaskedText) -> String {
        match text {
            MaskedText::Blanks(blanks) => self.blanks.fill(blanks, ""),
            MaskedText::Hint(hint) => self.hint.fill("", hint),
            MaskedText::BlanksAndHint(blanks, hint) => self.blanks_and_hint.fill(blanks, hint),
        }
    }
}
