//! Render endpoint

use axum::Json;
use cloze_core::config::ATTR_CARD;
use cloze_core::{render_element, ClozeElement};

use crate::error::Result;
use crate::models::{RenderRequest, RenderResponse, Side};

/// POST /api/render
/// Renders cloze markers in the given HTML for one side of a card
pub async fn render(Json(request): Json<RenderRequest>) -> Result<Json<RenderResponse>> {
    let mut element = options_element(&request).with_attribute(ATTR_CARD, request.card);
    let side = Side::from_back_present(request.back);

    let outcome = render_element(&mut element, side)?;

    Ok(Json(RenderResponse {
        html: element.inner_html,
        classes: element.classes,
        current_cloze: outcome.current_cloze,
        markers: outcome.markers,
    }))
}

/// Build an element carrying the request's options as `data-cloze-*` attributes.
fn options_element(request: &RenderRequest) -> ClozeElement {
    use cloze_core::config::*;

    let options = &request.options;
    let attributes = [
        (ATTR_SHOW_BEFORE, &options.show_before),
        (ATTR_SHOW_AFTER, &options.show_after),
        (ATTR_REPLACE_CHAR, &options.replace_char),
        (ATTR_REPLACE_SAME_LENGTH, &options.replace_same_length),
        (ATTR_ALWAYS_SHOW_BLANKS, &options.always_show_blanks),
        (ATTR_BLANKS_FORMAT, &options.blanks_format),
        (ATTR_HINT_FORMAT, &options.hint_format),
        (ATTR_BLANKS_AND_HINT_FORMAT, &options.blanks_and_hint_format),
        (ATTR_KEEP_REGEX, &options.keep_regex),
    ];

    attributes
        .into_iter()
        .fold(ClozeElement::new(request.html.clone()), |element, (name, value)| {
            match value {
                Some(value) => element.with_attribute(name, value.clone()),
                None => element,
            }
        })
}
