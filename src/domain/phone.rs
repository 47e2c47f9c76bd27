//! Phone field.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{9}$").expect("Failed to compile phone regex"));

/// Validation rule for [`Phone`].
///
/// # Validation Rules
///
/// - Exactly 9 ASCII digits
/// - No separators, spaces, sign or surrounding characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneRule;

impl FieldKind for PhoneRule {
    type Raw = String;
    type Value = String;

    fn validate(raw: String) -> Result<String, ValidationError> {
        if PHONE_REGEX.is_match(&raw) {
            Ok(raw)
        } else {
            Err(ValidationError::InvalidPhone(raw))
        }
    }
}

/// A phone number of exactly 9 digits.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("123456789").unwrap();
/// assert_eq!(phone.as_str(), "123456789");
/// assert!(Phone::new("123-456-789").is_err());
/// ```
pub type Phone = Field<PhoneRule>;

impl Field<PhoneRule> {
    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.value()
    }
}

// Serde support - serialize as string
impl Serialize for Field<PhoneRule> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Field<PhoneRule> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Field<PhoneRule> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
