//! Test fixtures and factory functions for request bodies.

use serde_json::json;

/// Create a render request body with default options.
pub fn render_request(html: &str, card: &str, back: bool) -> serde_json::Value {
    json!({ "html": html, "card": card, "back": back })
}

/// Create a render request body with explicit options.
pub fn render_request_with_options(
    html: &str,
    card: &str,
    back: bool,
    options: serde_json::Value,
) -> serde_json::Value {
    json!({ "html": html, "card": card, "back": back, "options": options })
}

/// Create a scan request body.
pub fn scan_request(content: &str, reuse: bool) -> serde_json::Value {
    json!({ "content": content, "reuse": reuse })
}

/// Note fields for an `ExpressionCloze` note with three companion fields.
pub fn expression_fields(cloze_content: &str) -> serde_json::Value {
    json!([
        { "name": "Expression", "value": "I am hungry." },
        { "name": "ExpressionCloze", "value": cloze_content },
        { "name": "ExpressionCloze1", "value": "" },
        { "name": "ExpressionCloze2", "value": "" },
        { "name": "ExpressionCloze3", "value": "1" },
    ])
}

/// Create a prepare request body.
pub fn prepare_request(field_name: &str, content: &str, reuse: bool) -> serde_json::Value {
    json!({
        "field_name": field_name,
        "fields": expression_fields(content),
        "content": content,
        "reuse": reuse
    })
}

/// Create a sync request body for companion fields that are all switched on.
pub fn sync_request(field_name: &str, content: &str) -> serde_json::Value {
    json!({
        "field_name": field_name,
        "fields": [
            { "name": "ExpressionCloze", "value": content },
            { "name": "ExpressionCloze1", "value": "1" },
            { "name": "ExpressionCloze2", "value": "1" },
        ],
        "content": content
    })
}
