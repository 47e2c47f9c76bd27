//! Error types for the contact book.
//!
//! This module defines crate-level error types using `thiserror`. Field
//! validation failures live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when working with an address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// An argument was outside its accepted range
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A record field rejected its input
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AddressBookError::InvalidArgument("batch size must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid argument: batch size must be positive");

        let err = ConfigError::InvalidValue {
            var: "CONTACT_BOOK_BATCH_SIZE".to_string(),
            reason: "Must be greater than 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for CONTACT_BOOK_BATCH_SIZE: Must be greater than 0"
        );
    }

    #[test]
    fn test_validation_error_conversion() {
        let err: AddressBookError = ValidationError::InvalidPhone("1".to_string()).into();
        assert_eq!(err.to_string(), "Validation failed: Phone number must have 9 digits");
    }
}
