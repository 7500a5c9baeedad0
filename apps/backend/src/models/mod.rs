//! API request and response types

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// Re-export shared types from cloze-core
pub use cloze_core::note::{ClozePreparation, FieldPlan, FieldUpdate, NoteField};
pub use cloze_core::{ClozeOptions, Side};

// === API Request/Response Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct RenderRequest {
    pub html: String,
    /// Card identifier, e.g. `Card 2`; trailing digits name the current cloze.
    pub card: String,
    /// Whether the document has a "back" element.
    #[serde(default)]
    pub back: bool,
    #[serde(default)]
    pub options: ClozeOptions,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RenderResponse {
    pub html: String,
    pub classes: Vec<String>,
    pub current_cloze: Option<u32>,
    pub markers: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScanRequest {
    pub content: String,
    #[serde(default)]
    pub reuse: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScanResponse {
    pub cloze_numbers: BTreeSet<u32>,
    pub next_cloze_number: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SyncRequest {
    pub field_name: String,
    pub fields: Vec<NoteField>,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PrepareRequest {
    pub field_name: String,
    pub fields: Vec<NoteField>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub reuse: bool,
}
