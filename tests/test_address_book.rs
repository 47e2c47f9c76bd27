//! Integration tests for address book batch traversal.

mod fixtures;

use contact_book::{AddressBook, AddressBookError, DEFAULT_BATCH_SIZE};
use fixtures::*;

#[test]
fn test_five_records_in_batches_of_two() {
    let book = sample_book(5);

    let batches: Vec<_> = book.iterate(2).unwrap().collect();
    let sizes: Vec<usize> = batches.iter().map(|b| b.len()).collect();
    assert_eq!(sizes, vec![2, 2, 1]);

    let names: Vec<&str> = batches
        .iter()
        .flat_map(|batch| batch.iter())
        .map(|record| record.name())
        .collect();
    assert_eq!(
        names,
        vec!["Contact 0", "Contact 1", "Contact 2", "Contact 3", "Contact 4"]
    );
}

#[test]
fn test_batch_count_is_ceiling_of_len_over_size() {
    for (count, size, expected) in [(0, 3, 0), (1, 3, 1), (3, 3, 1), (4, 3, 2), (10, 1, 10)] {
        let book = sample_book(count);
        assert_eq!(
            book.iterate(size).unwrap().count(),
            expected,
            "count={} size={}",
            count,
            size
        );
    }
}

#[test]
fn test_empty_book_yields_zero_batches() {
    let book = AddressBook::new();
    assert!(book.iterate(DEFAULT_BATCH_SIZE).unwrap().next().is_none());
    assert!((&book).into_iter().next().is_none());
}

#[test]
fn test_iteration_reflects_records_added_later() {
    let mut book = sample_book(2);
    assert_eq!(book.iterate(10).unwrap().count(), 1);

    book.add_record(sample_record("Late Arrival"));

    let last = book.iterate(2).unwrap().last().unwrap();
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].name(), "Late Arrival");
}

#[test]
fn test_iteration_is_restartable() {
    let book = sample_book(3);
    let first: Vec<usize> = book.iterate(2).unwrap().map(|b| b.len()).collect();
    let second: Vec<usize> = book.iterate(2).unwrap().map(|b| b.len()).collect();
    assert_eq!(first, second);
}

#[test]
fn test_zero_batch_size_is_invalid_argument() {
    let book = sample_book(3);
    match book.iterate(0) {
        Err(AddressBookError::InvalidArgument(reason)) => {
            assert!(reason.contains("batch size"));
        }
        other => panic!("Expected InvalidArgument, got: {:?}", other.map(|b| b.count())),
    }
}

#[test]
fn test_default_iteration_protocol() {
    let book = sample_book(12);
    let mut seen = 0;
    for batch in &book {
        assert!(batch.len() <= DEFAULT_BATCH_SIZE);
        seen += batch.len();
    }
    assert_eq!(seen, 12);
}

#[test]
fn test_extend_appends_in_order() {
    let mut book = AddressBook::new();
    book.add_record(sample_record("First"));
    book.extend(vec![sample_record("Second"), sample_record("Third")]);

    let names: Vec<&str> = book.records().iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[test]
fn test_records_with_fields_survive_traversal() {
    let mut book = AddressBook::new();
    book.add_record(sample_record_full("Oleg Babay", "123456789", date(1999, 5, 15)));
    book.add_contact("Olya Kozlova", Some("987654321"), None).unwrap();

    let batch = book.iterate(DEFAULT_BATCH_SIZE).unwrap().next().unwrap();
    assert_eq!(batch[0].phone().unwrap().as_str(), "123456789");
    assert_eq!(batch[0].days_to_birthday_on(date(2024, 1, 1)), Some(135));
    assert_eq!(batch[1].days_to_birthday_on(date(2024, 1, 1)), None);
}
