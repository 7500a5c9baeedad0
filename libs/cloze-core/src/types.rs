//! Core types for cloze rendering.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Which side of the card is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Question side: clozes are masked according to the show policy.
    Front,
    /// Answer side: every cloze is revealed.
    Back,
}

impl Default for Side {
    fn default() -> Self {
        Self::Front
    }
}

impl Side {
    /// The answer side is detected by the presence of a "back" element.
    pub fn from_back_present(back_present: bool) -> Self {
        if back_present { Self::Back } else { Self::Front }
    }

    pub fn is_back(self) -> bool {
        matches!(self, Self::Back)
    }
}

/// How many clozes before or after the current one stay visible on the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowValue {
    All,
    None,
    Count(u32),
}

impl Default for ShowValue {
    fn default() -> Self {
        Self::All
    }
}

impl ShowValue {
    /// Parse an attribute value. Anything other than `all` or a run of digits
    /// behaves like `none`.
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
            Self::Count(value.parse().unwrap_or(u32::MAX))
        } else {
            Self::None
        }
    }

    /// Whether a cloze `distance` steps away from the current one is shown.
    pub fn reveals(self, distance: u32) -> bool {
        match self {
            Self::All => true,
            Self::Count(k) => distance <= k,
            Self::None => false,
        }
    }
}

/// Style class of the container wrapping a rendered cloze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClozeClass {
    Current,
    Other,
}

impl ClozeClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Current => "current-cloze",
            Self::Other => "other-cloze",
        }
    }
}

/// A parsed `((cN::content::hint))` occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Byte range of the full match in the scanned HTML.
    pub span: Range<usize>,
    pub cloze_number: u32,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}
