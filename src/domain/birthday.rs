//! Birthday field.

use super::errors::ValidationError;
use super::field::{Field, FieldKind};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// Wire format for birthdays.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation rule for [`Birthday`].
///
/// The raw input is already a calendar date, so any value the type system
/// lets through is accepted. No range checks are applied: a birthday in the
/// future is still a birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayRule;

impl FieldKind for BirthdayRule {
    type Raw = NaiveDate;
    type Value = NaiveDate;

    fn validate(raw: NaiveDate) -> Result<NaiveDate, ValidationError> {
        Ok(raw)
    }
}

/// A person's date of birth.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::domain::Birthday;
///
/// let date = NaiveDate::from_ymd_opt(1999, 5, 15).unwrap();
/// let birthday = Birthday::new(date).unwrap();
/// assert_eq!(*birthday.value(), date);
/// ```
pub type Birthday = Field<BirthdayRule>;

impl Field<BirthdayRule> {
    /// Create a birthday from a date-time, keeping only the calendar date.
    pub fn from_datetime(datetime: NaiveDateTime) -> Result<Self, ValidationError> {
        Self::new(datetime.date())
    }

    /// The date this birthday falls on in `year`.
    ///
    /// A 29 February birthday falls on 28 February in non-leap years.
    /// Returns `None` only when `year` is outside the supported calendar range.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        let date = self.value();
        NaiveDate::from_ymd_opt(year, date.month(), date.day()).or_else(|| {
            if date.month() == 2 && date.day() == 29 {
                debug!(year, "leap-day birthday moved to 28 February");
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

// Serde support - serialize as an ISO date string
impl Serialize for Field<BirthdayRule> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value()
            .format(DATE_FORMAT)
            .to_string()
            .serialize(serializer)
    }
}

// Serde support - deserialize from an ISO date string, rejecting anything else
impl<'de> Deserialize<'de> for Field<BirthdayRule> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match NaiveDate::parse_from_str(&s, DATE_FORMAT) {
            Ok(date) => Birthday::new(date).map_err(serde::de::Error::custom),
            Err(_) => Err(serde::de::Error::custom(ValidationError::InvalidBirthday(s))),
        }
    }
}

impl fmt::Display for Field<BirthdayRule> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value().format(DATE_FORMAT))
    }
}
