//! Cloze deletion rendering for flashcards.
//!
//! Provides:
//! - Marker scanning for `((cN::content::hint))` syntax
//! - Option resolution with defaults ([`ClozeOptions`] -> [`ClozeConfig`])
//! - Front/back visibility policy and blank formatting
//! - In-place rendering of a host element
//! - Cloze number allocation and companion field planning for editors

pub mod blanks;
pub mod config;
pub mod error;
pub mod note;
pub mod policy;
pub mod render;
pub mod scanner;
pub mod template;
pub mod types;

pub use blanks::{format_blanks, strip_keep_markers};
pub use config::{ClozeConfig, ClozeOptions};
pub use error::{ClozeError, Result};
pub use note::{
    plan_cloze_fields, prepare_cloze, sync_cloze_fields, ClozePreparation, FieldPlan, FieldUpdate,
    NoteField,
};
pub use policy::{decide, Decision};
pub use render::{assemble, render_element, render_html, ClozeElement, ClozeHost, RenderOutcome};
pub use scanner::{
    cloze_numbers, current_cloze_number, marker_delimiters, next_cloze_number, scan,
    wrap_selection,
};
pub use template::{MaskedText, Templates};
pub use types::{ClozeClass, Marker, ShowValue, Side};
