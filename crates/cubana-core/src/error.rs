//! Error types for cubana-core

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Confirmation text missing or whitespace-only
    EmptyConfirmation,
    /// Operation already confirmed
    AlreadyConfirmed,
    /// Movement not eligible for deletion
    NotDeletable,
    /// Validation error
    ValidationError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::EmptyConfirmation => write!(f, "EMPTY_CONFIRMATION"),
            ErrorCode::AlreadyConfirmed => write!(f, "ALREADY_CONFIRMED"),
            ErrorCode::NotDeletable => write!(f, "NOT_DELETABLE"),
            ErrorCode::ValidationError => write!(f, "VALIDATION_ERROR"),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
            ErrorSeverity::Error => write!(f, "error"),
        }
    }
}

/// Main error type for cubana-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Confirmation text is required")]
    EmptyConfirmation,

    #[error("Operation already confirmed: {id}")]
    AlreadyConfirmed { id: String },

    #[error("Movement not deletable: {reason}")]
    NotDeletable { reason: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::EmptyConfirmation => ErrorCode::EmptyConfirmation,
            CoreError::AlreadyConfirmed { .. } => ErrorCode::AlreadyConfirmed,
            CoreError::NotDeletable { .. } => ErrorCode::NotDeletable,
            CoreError::ValidationError { .. } => ErrorCode::ValidationError,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::EmptyConfirmation => ErrorSeverity::Info,
            CoreError::AlreadyConfirmed { .. } => ErrorSeverity::Warning,
            CoreError::NotDeletable { .. } => ErrorSeverity::Warning,
            CoreError::ValidationError { .. } => ErrorSeverity::Warning,
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::EmptyConfirmation.to_string(), "EMPTY_CONFIRMATION");
        assert_eq!(ErrorCode::NotDeletable.to_string(), "NOT_DELETABLE");
    }

    #[test]
    fn test_core_error_code() {
        let error = CoreError::AlreadyConfirmed { id: "r1".to_string() };
        assert_eq!(error.code(), ErrorCode::AlreadyConfirmed);
        assert_eq!(error.severity(), ErrorSeverity::Warning);

        assert_eq!(CoreError::EmptyConfirmation.severity(), ErrorSeverity::Info);
    }
}
