//! Visibility policy: what happens to each marker on a given side.

use crate::blanks::{format_blanks, has_keep_span, strip_keep_markers};
use crate::config::ClozeConfig;
use crate::template::MaskedText;
use crate::types::{ClozeClass, Marker, Side};
use serde::{Deserialize, Serialize};

/// Outcome for a single marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// Show the content with keep markers stripped, unwrapped.
    Reveal,
    /// Show the content wrapped as the current cloze (answer side).
    RevealCurrent,
    /// Replace the content with blanks and/or the hint.
    Mask(ClozeClass),
}

/// Decide the outcome for cloze `marker` when `current` is being tested.
pub fn decide(marker: &Marker, config: &ClozeConfig, current: u32, side: Side) -> Decision {
    let n = marker.cloze_number;

    if side.is_back() {
        return if n == current {
            Decision::RevealCurrent
        } else {
            Decision::Reveal
        };
    }

    if n == current {
        return Decision::Mask(ClozeClass::Current);
    }

    let visible = if n < current {
        config.show_before.reveals(current - n)
    } else {
        config.show_after.reveals(n - current)
    };

    if visible {
        Decision::Reveal
    } else {
        Decision::Mask(ClozeClass::Other)
    }
}

impl Decision {
    /// Replacement HTML for `marker` under this decision.
    pub fn apply(self, marker: &Marker, config: &ClozeConfig) -> String {
        match self {
            Self::Reveal => strip_keep_markers(&marker.content),
            Self::RevealCurrent => {
                wrap_span(&strip_keep_markers(&marker.content), ClozeClass::Current)
            }
            Self::Mask(class) => {
                let text = masked_text(&marker.content, marker.hint.as_deref(), config);
                wrap_span(&config.templates.format(&text), class)
            }
        }
    }
}

/// Choose what stands in for masked content.
///
/// Blanks accompany a hint only when always-show-blanks is set or the content
/// keeps some of its text.
pub fn masked_text(content: &str, hint: Option<&str>, config: &ClozeConfig) -> MaskedText {
    match hint {
        Some(hint) if config.always_show_blanks || has_keep_span(content) => {
            MaskedText::BlanksAndHint(format_blanks(content, config), hint.to_string())
        }
        Some(hint) => MaskedText::Hint(hint.to_string()),
        None => MaskedText::Blanks(format_blanks(content, config)),
    }
}

/// Wrap `content` in a styling container for `class`.
pub fn wrap_span(content: &str, class: ClozeClass) -> String {
    format!("<span class=\"{}\">{}</span>", class.as_str(), content)
}
