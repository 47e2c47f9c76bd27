//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Phone, ValidationError};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// A contact entry: a name plus an optional phone and birthday.
///
/// Optional fields are either absent or hold a validated value. Their
/// presence is fixed at construction; only their values can be replaced,
/// and only through the field's validating setter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Contact name (not validated)
    name: String,

    /// Phone number, if one was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    phone: Option<Phone>,

    /// Date of birth, if one was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record, validating any supplied phone or birthday.
    ///
    /// An empty phone string counts as "not supplied" and leaves the phone
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` of the first field that rejects its
    /// input. No record is produced in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use contact_book::Record;
    ///
    /// let birthday = NaiveDate::from_ymd_opt(1999, 5, 15);
    /// let record = Record::new("Oleg Babay", Some("123456789"), birthday).unwrap();
    /// assert_eq!(record.name(), "Oleg Babay");
    ///
    /// assert!(Record::new("Olya Kozlova", Some("98765"), None).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        phone: Option<&str>,
        birthday: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        let phone = match phone {
            Some(raw) if !raw.is_empty() => Some(Phone::new(raw)?),
            _ => None,
        };
        let birthday = birthday.map(Birthday::new).transpose()?;

        Ok(Self {
            name: name.into(),
            phone,
            birthday,
        })
    }

    /// Get the contact name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the phone field, if present.
    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    /// Get the phone field for value replacement, if present.
    pub fn phone_mut(&mut self) -> Option<&mut Phone> {
        self.phone.as_mut()
    }

    /// Get the birthday field, if present.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Get the birthday field for value replacement, if present.
    pub fn birthday_mut(&mut self) -> Option<&mut Birthday> {
        self.birthday.as_mut()
    }

    /// Days from today (local calendar date) until the next birthday.
    ///
    /// Returns `None` when the record has no birthday.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_on(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday.
    ///
    /// A birthday falling on `today` yields 0. Once this year's birthday has
    /// passed, the count runs to next year's occurrence.
    pub fn days_to_birthday_on(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;

        let mut next = birthday.anniversary_in(today.year())?;
        if today > next {
            next = birthday.anniversary_in(today.year() + 1)?;
        }

        Some((next - today).num_days())
    }
}
