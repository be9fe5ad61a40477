// dataclean-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid value for '{field}': {reason}")]
    #[diagnostic(
        code(dataclean::domain::validation),
        help("The record was rejected before construction. Fix the input and retry.")
    )]
    Validation { field: String, reason: String },

    #[error("Unknown {field} '{value}'")]
    #[diagnostic(code(dataclean::domain::unknown_variant))]
    UnknownVariant { field: String, value: String },

    #[error("Invalid navigation: {0}")]
    #[diagnostic(code(dataclean::domain::navigation))]
    InvalidTransition(String),

    #[error("Monitor '{0}' not found")]
    #[diagnostic(code(dataclean::domain::monitor_not_found))]
    MonitorNotFound(String),
}

impl DomainError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        DomainError::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn unknown_variant(field: &str, value: &str) -> Self {
        DomainError::UnknownVariant {
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

/// Flattens `validator` output into the first offending field.
impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        match fields.first() {
            Some((field, errs)) => {
                let reason = errs
                    .first()
                    .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| "constraint violated".to_string());
                DomainError::validation(field, reason)
            }
            None => DomainError::validation("record", errors.to_string()),
        }
    }
}

/// Converts a signed count coming from an untrusted boundary.
pub fn non_negative(field: &str, value: i64) -> Result<u64, DomainError> {
    u64::try_from(value)
        .map_err(|_| DomainError::validation(field, format!("must be >= 0, got {}", value)))
}
