//! Error types for cloze-core.

use thiserror::Error;

/// Result type alias using ClozeError.
pub type Result<T> = std::result::Result<T, ClozeError>;

/// Errors raised while resolving configuration or preparing cloze fields.
///
/// Rendering itself never fails: malformed markers pass through untouched.
#[derive(Debug, Error)]
pub enum ClozeError {
    #[error("invalid keep pattern {pattern:?}: {source}")]
    InvalidKeepPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("template {template} does not support token {{{token}}}")]
    UnknownTemplateToken { template: &'static str, token: String },

    #[error("cannot cloze unless field name ends in Cloze: {field}")]
    FieldNameNotCloze { field: String },

    #[error("cannot populate empty field {field} because source field {source_field} was not found")]
    MissingSourceField { field: String, source_field: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_token_display() {
        let error = ClozeError::UnknownTemplateToken {
            template: "blanks-format",
            token: "hint".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "template blanks-format does not support token {hint}"
        );
    }

    #[test]
    fn test_field_name_display() {
        let error = ClozeError::FieldNameNotCloze {
            field: "Expression".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "cannot cloze unless field name ends in Cloze: Expression"
        );
    }
}
