//! Validation error types.
//!
//! Records written through the admin surface are checked field by field
//! before anything reaches a store. All violations are reported together.

use thiserror::Error;

/// A single validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates the error reported for an empty required field.
    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, "must not be empty")
    }
}

/// Trait for validatable records.
pub trait Validate {
    /// Validates the record.
    ///
    /// Returns a list of validation errors, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the record is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

/// Pushes a `required` error when `value` is blank.
pub(crate) fn require(errors: &mut Vec<ValidationError>, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(ValidationError::required(field));
    }
}
