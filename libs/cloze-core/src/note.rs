//! Preparing a note's fields when a new cloze is added.
//!
//! A note has a field whose name ends in `Cloze` (say `ExpressionCloze`) that
//! holds the marked-up text, plus numbered companion fields
//! (`ExpressionCloze1`, `ExpressionCloze2`, ...). A companion field set to `1`
//! generates the card for that cloze; an empty one generates nothing.

use crate::error::{ClozeError, Result};
use crate::scanner::{cloze_numbers, marker_delimiters, next_cloze_number};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const CLOZE_SUFFIX: &str = "Cloze";
const ENABLED: &str = "1";
const DISABLED: &str = "<br>";

/// A named field of a note and its current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteField {
    pub name: String,
    pub value: String,
}

/// New value for a companion field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldUpdate {
    pub name: String,
    pub value: String,
}

/// Companion field changes for a set of cloze numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPlan {
    pub updates: Vec<FieldUpdate>,
    /// Cloze numbers that have a companion field.
    pub found: BTreeSet<u32>,
    /// Companion field names that would be needed but do not exist.
    pub missing: Vec<String>,
}

/// What to do with the cloze field when the user asks for a new cloze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ClozePreparation {
    /// The cloze field is empty: populate it from its source field.
    CopyFrom {
        source_field: String,
        content: String,
    },
    /// Wrap the selection as cloze `number` and apply the field plan.
    Wrap {
        number: u32,
        prefix: String,
        suffix: String,
        plan: FieldPlan,
    },
}

/// Plan companion field updates for `cloze_field_name`.
///
/// Fields are only overwritten when they hold nothing but `1` or whitespace,
/// so hand-edited values survive.
pub fn plan_cloze_fields(
    cloze_field_name: &str,
    fields: &[NoteField],
    cloze_numbers: &BTreeSet<u32>,
) -> FieldPlan {
    let mut plan = FieldPlan::default();

    for field in fields {
        let Some(number) = companion_number(cloze_field_name, &field.name) else {
            continue;
        };
        plan.found.insert(number);

        let current = field.value.trim();
        if current.is_empty() || current == ENABLED {
            let value = if cloze_numbers.contains(&number) {
                ENABLED
            } else {
                DISABLED
            };
            plan.updates.push(FieldUpdate {
                name: field.name.clone(),
                value: value.to_string(),
            });
        }
    }

    plan.missing = cloze_numbers
        .difference(&plan.found)
        .map(|n| format!("{}{}", cloze_field_name, n))
        .collect();

    plan
}

/// Prepare a new cloze in `field_name` whose current content is `content`.
pub fn prepare_cloze(
    field_name: &str,
    fields: &[NoteField],
    content: &str,
    reuse: bool,
) -> Result<ClozePreparation> {
    let source_name = cloze_source_name(field_name)?;

    if content.is_empty() {
        let source = fields
            .iter()
            .find(|f| f.name == source_name)
            .ok_or_else(|| ClozeError::MissingSourceField {
                field: field_name.to_string(),
                source_field: source_name.to_string(),
            })?;
        return Ok(ClozePreparation::CopyFrom {
            source_field: source.name.clone(),
            content: source.value.clone(),
        });
    }

    let mut numbers = cloze_numbers(content);
    let number = next_cloze_number(&numbers, reuse);
    numbers.insert(number);

    let plan = plan_cloze_fields(field_name, fields, &numbers);
    if !plan.missing.is_empty() {
        tracing::warn!(missing = ?plan.missing, "not enough cloze fields");
    }

    let (prefix, suffix) = marker_delimiters(number);
    Ok(ClozePreparation::Wrap {
        number,
        prefix,
        suffix,
        plan,
    })
}

/// Bring the companion fields of `field_name` in line with the clozes that
/// `content` currently uses. No new number is allocated, so a removed cloze
/// switches its field off.
pub fn sync_cloze_fields(
    field_name: &str,
    fields: &[NoteField],
    content: &str,
) -> Result<FieldPlan> {
    cloze_source_name(field_name)?;
    Ok(plan_cloze_fields(field_name, fields, &cloze_numbers(content)))
}

fn cloze_source_name(field_name: &str) -> Result<&str> {
    field_name
        .strip_suffix(CLOZE_SUFFIX)
        .ok_or_else(|| ClozeError::FieldNameNotCloze {
            field: field_name.to_string(),
        })
}

fn companion_number(cloze_field_name: &str, name: &str) -> Option<u32> {
    let digits = name.strip_prefix(cloze_field_name)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
