//! Error types for the Macro Calculator

use thiserror::Error;

/// Strict parsing failure for a form enumeration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl ParseError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        ParseError::UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }
}

/// Rejection raised by the optional strict validation layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a valid number")]
    NotFinite { field: &'static str },
}

impl ValidationError {
    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. } | ValidationError::NotFinite { field } => field,
        }
    }
}
