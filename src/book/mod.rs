//! Address book: an ordered collection of records with batched traversal.

pub mod batches;

pub use batches::Batches;

use crate::error::{AddressBookError, AddressBookResult};
use crate::models::Record;
use chrono::NaiveDate;
use tracing::debug;

/// Batch size used when iterating a book without an explicit size.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// An ordered collection of records.
///
/// Records keep their insertion order and duplicates are allowed. The book
/// only grows; there is no removal.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// for i in 0..5 {
///     book.add_record(Record::new(format!("Contact {}", i), None, None).unwrap());
/// }
///
/// let sizes: Vec<usize> = book.iterate(2).unwrap().map(|batch| batch.len()).collect();
/// assert_eq!(sizes, vec![2, 2, 1]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the end of the book.
    pub fn add_record(&mut self, record: Record) {
        debug!(name = record.name(), position = self.records.len(), "record added");
        self.records.push(record);
    }

    /// Build a record from raw inputs and append it.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::Validation` if a field rejects its input;
    /// the book is left unchanged.
    pub fn add_contact(
        &mut self,
        name: impl Into<String>,
        phone: Option<&str>,
        birthday: Option<NaiveDate>,
    ) -> AddressBookResult<()> {
        let record = Record::new(name, phone, birthday)?;
        self.add_record(record);
        Ok(())
    }

    /// Traverse the book in batches of `batch_size` records.
    ///
    /// Each call starts a fresh traversal over the book's current contents.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::InvalidArgument` if `batch_size` is 0.
    pub fn iterate(&self, batch_size: usize) -> AddressBookResult<Batches<'_>> {
        if batch_size == 0 {
            return Err(AddressBookError::InvalidArgument(
                "batch size must be positive".to_string(),
            ));
        }

        debug!(batch_size, records = self.records.len(), "starting batch traversal");
        Ok(Batches::new(&self.records, batch_size))
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a [Record];
    type IntoIter = Batches<'a>;

    /// Traverse in batches of [`DEFAULT_BATCH_SIZE`].
    fn into_iter(self) -> Self::IntoIter {
        Batches::new(&self.records, DEFAULT_BATCH_SIZE)
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}
