//! Engine error types.

use thiserror::Error;

use curricula_core::ValidationError;
use curricula_traits::TraitError;

use crate::request::Layer;

/// Engine error type.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// A layer fetch failed or timed out. Recovered inside resolution: the
    /// layer is treated as empty and the error is only logged.
    #[error("{layer} store unavailable: {reason}")]
    StoreUnavailable {
        /// Layer whose fetch failed
        layer: Layer,
        /// Underlying failure
        reason: String,
    },

    /// An admin write was rejected before reaching the store.
    #[error("validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),

    /// An admin write failed in the store.
    #[error("storage error: {0}")]
    Storage(#[from] TraitError),

    /// The caller cancelled the resolution.
    #[error("resolution cancelled")]
    Cancelled,
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
