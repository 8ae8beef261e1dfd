//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_book::{ContactBookHandler, Record};
use tempfile::NamedTempFile;

/// Create a test handler with temporary storage
pub fn get_test_handler() -> (ContactBookHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = ContactBookHandler::new(temp_file.path()).unwrap();
    (handler, temp_file)
}

/// Create a record with the given phones and optional birthday
pub fn create_test_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(name).unwrap();
    for phone in phones {
        record.add_phone(phone).unwrap();
    }
    if let Some(date) = birthday {
        record.add_birthday(date).unwrap();
    }
    record
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
