//! Test fixtures and sample data for integration tests.

use chrono::NaiveDate;
use contact_book::{AddressBook, Record};

/// Build a calendar date, panicking on an invalid one.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Create a sample record with just a name.
pub fn sample_record(name: &str) -> Record {
    Record::new(name, None, None).expect("name-only record is always valid")
}

/// Create a sample record with a phone and birthday.
#[allow(dead_code)]
pub fn sample_record_full(name: &str, phone: &str, birthday: NaiveDate) -> Record {
    Record::new(name, Some(phone), Some(birthday)).expect("valid fixture record")
}

/// Create a book holding `count` name-only records named "Contact 0", "Contact 1", ...
#[allow(dead_code)]
pub fn sample_book(count: usize) -> AddressBook {
    (0..count)
        .map(|i| sample_record(&format!("Contact {}", i)))
        .collect()
}
