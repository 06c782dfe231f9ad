//! Test fixtures and sample data for integration tests.
//!
//! This module provides reusable records and books built the same way the
//! demo builds them.

use contact_book::{ContactBook, ContactRecord};

/// Create a record with the given phones, panicking on invalid input.
pub fn sample_record(name: &str, phones: &[&str]) -> ContactRecord {
    let mut record = ContactRecord::new(name, None).expect("fixture name is valid");
    for phone in phones {
        assert!(record.add_phone(phone).is_added(), "fixture phone {phone} is valid");
    }
    record
}

/// The demo book: John with two phones, Jane with one.
#[allow(dead_code)]
pub fn john_and_jane() -> ContactBook {
    let mut book = ContactBook::new();
    book.add_record(sample_record("John", &["1234567890", "5555555555"]));
    book.add_record(sample_record("Jane", &["9876543210"]));
    book
}

/// A book of `count` phone-less records named `Contact 0`, `Contact 1`, ...
#[allow(dead_code)]
pub fn numbered_book(count: usize) -> ContactBook {
    let mut book = ContactBook::new();
    for i in 0..count {
        book.add_record(sample_record(&format!("Contact {}", i), &[]));
    }
    book
}
