//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Covers deterministic failures only (rejected values and entries). Nothing
/// here carries IO or infrastructure state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a non-finite price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An entry in a priced sequence could not be totaled.
    #[error("invalid entry at index {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_entry(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidEntry {
            index,
            reason: reason.into(),
        }
    }
}
