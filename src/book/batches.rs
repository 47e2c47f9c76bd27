//! Batched traversal over address book records.

use crate::models::Record;
use std::iter::FusedIterator;

/// Cursor yielding consecutive, ordered slices of at most `batch_size`
/// records. Every batch is full except possibly the last.
#[derive(Debug, Clone)]
pub struct Batches<'a> {
    records: &'a [Record],
    offset: usize,
    batch_size: usize,
}

impl<'a> Batches<'a> {
    /// `batch_size` must be non-zero; [`AddressBook::iterate`] checks this.
    ///
    /// [`AddressBook::iterate`]: super::AddressBook::iterate
    pub(crate) fn new(records: &'a [Record], batch_size: usize) -> Self {
        debug_assert!(batch_size > 0);
        Self {
            records,
            offset: 0,
            batch_size,
        }
    }

    /// Size of every batch but possibly the last.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }
}

impl<'a> Iterator for Batches<'a> {
    type Item = &'a [Record];

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.records.len() {
            return None;
        }

        let end = self
            .offset
            .saturating_add(self.batch_size)
            .min(self.records.len());
        let batch = &self.records[self.offset..end];
        self.offset = end;
        Some(batch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len() - self.offset;
        let batches = remaining.div_ceil(self.batch_size);
        (batches, Some(batches))
    }
}

impl ExactSizeIterator for Batches<'_> {}

impl FusedIterator for Batches<'_> {}
