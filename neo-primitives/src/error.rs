//! Error types for primitive parsing.

use thiserror::Error;

/// Errors raised while building or parsing primitive values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
    /// The input has the wrong length or is not valid hexadecimal.
    #[error("invalid format: {message}")]
    InvalidFormat {
        /// Description of the problem.
        message: String,
    },

    /// A base58check address failed validation.
    #[error("invalid address: {message}")]
    InvalidAddress {
        /// Description of the problem.
        message: String,
    },
}

impl PrimitiveError {
    pub(crate) fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_address(message: impl Into<String>) -> Self {
        Self::InvalidAddress {
            message: message.into(),
        }
    }
}

/// Result alias for primitive operations.
pub type PrimitiveResult<T> = std::result::Result<T, PrimitiveError>;
