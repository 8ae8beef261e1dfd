// Persistence tests for the TOML storage
mod common;

use common::create_test_record;
use contact_book::{AddressBook, Storage, StorageError};
use std::fs;
use tempfile::{NamedTempFile, tempdir};

#[test]
fn test_load_missing_file_returns_empty_book() {
    let dir = tempdir().unwrap();
    let storage = Storage::new(dir.path().join("missing.toml"));

    let book = storage.load().unwrap();
    assert!(book.is_empty());
}

#[test]
fn test_load_unreadable_path_is_io_error() {
    // A directory exists but cannot be read as a file; only a missing file
    // may start an empty book
    let dir = tempdir().unwrap();
    let storage = Storage::new(dir.path());

    let result = storage.load();
    assert!(matches!(result, Err(StorageError::Io { .. })));
}

#[test]
fn test_load_empty_file_returns_empty_book() {
    let temp_file = NamedTempFile::new().unwrap();
    let storage = Storage::new(temp_file.path());
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempdir().unwrap();
    let storage = Storage::new(dir.path().join("addressbook.toml"));

    let mut book = AddressBook::new();
    book.add_record(create_test_record(
        "John",
        &["5555555555", "1234567890", "5555555555"],
        Some("15.06.1990"),
    ));
    book.add_record(create_test_record("Jane", &["0987654321"], None));
    book.add_record(create_test_record("NoPhone", &[], Some("29.02.2000")));
    book.add_record(create_test_record(" Padded ", &["1111111111"], None));

    storage.save(&book).unwrap();
    let loaded = storage.load().unwrap();

    assert_eq!(loaded, book);
    let names: Vec<&str> = loaded.records().map(|r| r.name()).collect();
    assert_eq!(names, vec!["John", "Jane", "NoPhone", " Padded "]);
    let john_phones: Vec<&str> = loaded
        .find("John")
        .unwrap()
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect();
    assert_eq!(john_phones, vec!["5555555555", "1234567890", "5555555555"]);
    assert!(loaded.find("Jane").unwrap().birthday().is_none());
}

#[test]
fn test_save_overwrites_previous_content() {
    let dir = tempdir().unwrap();
    let storage = Storage::new(dir.path().join("addressbook.toml"));

    let mut book = AddressBook::new();
    book.add_record(create_test_record("John", &["1234567890"], None));
    storage.save(&book).unwrap();

    book.delete("John");
    book.add_record(create_test_record("Jane", &["0987654321"], None));
    storage.save(&book).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.find("John").is_none());
    assert!(loaded.find("Jane").is_some());
}

#[test]
fn test_saved_file_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("addressbook.toml");
    let storage = Storage::new(&path);

    let mut book = AddressBook::new();
    book.add_record(create_test_record("John", &["1234567890"], Some("15.06.1990")));
    storage.save(&book).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("format_version = 1"));
    assert!(content.contains("[[contact]]"));
    assert!(content.contains("name = \"John\""));
    assert!(content.contains("\"1234567890\""));
    assert!(content.contains("birthday = \"15.06.1990\""));
}

#[test]
fn test_load_without_format_version() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("addressbook.toml");
    fs::write(
        &path,
        "[[contact]]\nname = \"John\"\nphones = [\"1234567890\"]\n",
    )
    .unwrap();

    let book = Storage::new(&path).load().unwrap();
    assert_eq!(book.find("John").unwrap().phones().len(), 1);
}

#[test]
fn test_load_missing_phones_field_defaults_to_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("addressbook.toml");
    fs::write(
        &path,
        "format_version = 1\n\n[[contact]]\nname = \"John\"\nbirthday = \"01.02.1990\"\n",
    )
    .unwrap();

    let book = Storage::new(&path).load().unwrap();
    let john = book.find("John").unwrap();
    assert!(john.phones().is_empty());
    assert_eq!(john.birthday().unwrap().to_string(), "01.02.1990");
}

#[test]
fn test_load_duplicate_names_last_wins() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("addressbook.toml");
    fs::write(
        &path,
        "[[contact]]\nname = \"John\"\nphones = [\"1111111111\"]\n\n\
         [[contact]]\nname = \"John\"\nphones = [\"2222222222\"]\n",
    )
    .unwrap();

    let book = Storage::new(&path).load().unwrap();
    assert_eq!(book.len(), 1);
    assert_eq!(book.find("John").unwrap().phones()[0].as_str(), "2222222222");
}

#[test]
fn test_load_invalid_phone_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("addressbook.toml");
    fs::write(&path, "[[contact]]\nname = \"John\"\nphones = [\"123\"]\n").unwrap();

    let result = Storage::new(&path).load();
    assert!(matches!(result, Err(StorageError::Parse { .. })));
}

#[test]
fn test_load_corrupt_file_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("addressbook.toml");
    fs::write(&path, "this is = = not toml").unwrap();

    let result = Storage::new(&path).load();
    assert!(matches!(result, Err(StorageError::Parse { .. })));
}

#[test]
fn test_load_newer_format_version_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("addressbook.toml");
    fs::write(&path, "format_version = 99\n").unwrap();

    match Storage::new(&path).load() {
        Err(StorageError::UnsupportedVersion {
            found, supported, ..
        }) => {
            assert_eq!(found, 99);
            assert_eq!(supported, 1);
        }
        other => panic!("unexpected result: {:?}", other.map(|b| b.len())),
    }
}

#[test]
fn test_version_is_checked_by_storage_only() {
    // The record parser ignores format_version; Storage decides what it accepts
    let content = "format_version = 99\n\n[[contact]]\nname = \"John\"\n";
    let book: AddressBook = toml::from_str(content).unwrap();
    assert!(book.find("John").is_some());

    let dir = tempdir().unwrap();
    let path = dir.path().join("addressbook.toml");
    fs::write(&path, content).unwrap();
    assert!(matches!(
        Storage::new(&path).load(),
        Err(StorageError::UnsupportedVersion { found: 99, .. })
    ));
}

#[test]
fn test_save_into_missing_directory_is_io_error() {
    let dir = tempdir().unwrap();
    let storage = Storage::new(dir.path().join("no-such-dir").join("addressbook.toml"));

    let result = storage.save(&AddressBook::new());
    assert!(matches!(result, Err(StorageError::Io { .. })));
}
