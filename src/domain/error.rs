use thiserror::Error;

/// Core domain errors
///
/// Validation variants carry the exact user-facing message; they are
/// recoverable by re-submitting corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Please enter a sentence to repeat!")]
    EmptySentence,

    #[error("Number of repetitions must be at least 1!")]
    CountTooLow,

    #[error("Number of repetitions cannot exceed 100!")]
    CountTooHigh,

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// True for the user-input validation variants, false for `Internal`.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::Internal { .. })
    }
}
