//! Error types for erfcly operations.
//!
//! The numeric kernels are total and never fail. Errors only come from the
//! buffer-writing array drivers, which validate their arguments instead of
//! panicking.

use std::fmt;

/// Errors that can occur during erfcly operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErfclyError {
    /// Output buffer length does not match the input length.
    LengthMismatch {
        /// Number of elements the output buffer must hold.
        expected: usize,
        /// Number of elements the output buffer actually holds.
        actual: usize,
    },
    /// Input validation error.
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
}

impl fmt::Display for ErfclyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErfclyError::LengthMismatch { expected, actual } => write!(
                f,
                "Length mismatch: output holds {} elements but input has {}",
                actual, expected
            ),
            ErfclyError::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
        }
    }
}

impl std::error::Error for ErfclyError {}

/// Result type alias for erfcly operations.
pub type Result<T> = std::result::Result<T, ErfclyError>;

/// Creates a length mismatch error.
pub fn length_mismatch(expected: usize, actual: usize) -> ErfclyError {
    ErfclyError::LengthMismatch { expected, actual }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> ErfclyError {
    ErfclyError::ValidationError {
        message: message.into(),
    }
}
