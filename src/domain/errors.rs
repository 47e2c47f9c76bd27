//! Domain validation errors.

use std::fmt;

/// Errors raised when a field's raw input fails its type-specific predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly 9 digits.
    InvalidPhone(String),

    /// The provided birthday is not a calendar date.
    InvalidBirthday(String),
}

impl ValidationError {
    /// Human-readable reason for the rejection.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidPhone(_) => "Phone number must have 9 digits",
            Self::InvalidBirthday(_) => "Birthday value must be a date object",
        }
    }

    /// The raw input that was rejected.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidPhone(raw) | Self::InvalidBirthday(raw) => raw,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason())
    }
}

impl std::error::Error for ValidationError {}
