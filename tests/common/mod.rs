//! Shared fixtures for address book integration tests.

use address_book::{AddressBook, Phone, Record};

/// Build a record with the given phones, panicking on invalid fixture data.
#[allow(dead_code)]
pub fn record_with_phones(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(name).expect("fixture name is valid");
    for phone in phones {
        record.add_phone(phone).expect("fixture phone is valid");
    }
    record
}

/// The two-contact book used by the demo scenario.
#[allow(dead_code)]
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(record_with_phones(
        "John Johnson",
        &["1234567890", "5555555555"],
    ))
    .expect("fixture names are unique");
    book.add_record(record_with_phones("Jane Johnson", &["9876543210"]))
        .expect("fixture names are unique");
    book
}

/// Normalized digits of every phone on a record, in order.
#[allow(dead_code)]
pub fn phone_digits(record: &Record) -> Vec<String> {
    record.phones().iter().map(Phone::to_string).collect()
}
