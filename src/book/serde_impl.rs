//! Serialization and deserialization implementations for AddressBook
//!
//! The file is a TOML document with a `format_version` and one `[[contact]]`
//! table per record. Field values are validated again on the way in.

use super::address_book::{AddressBook, FORMAT_VERSION};
use super::record::Record;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

fn default_format_version() -> u32 {
    FORMAT_VERSION
}

#[derive(Deserialize)]
struct AddressBookHelper {
    #[serde(default)]
    contact: Vec<Record>,
}

/// Read only the version of an address book document
///
/// Storage checks this before parsing the records, whose layout may differ
/// in files from a newer release. The record parser itself ignores the
/// version.
#[derive(Deserialize)]
pub(crate) struct VersionHeader {
    #[serde(default = "default_format_version")]
    pub(crate) format_version: u32,
}

impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = AddressBookHelper::deserialize(deserializer)?;

        // Repeated names resolve the same way as add_record: last one wins
        let mut book = AddressBook::new();
        for record in helper.contact {
            book.add_record(record);
        }
        Ok(book)
    }
}

impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("AddressBook", 2)?;
        state.serialize_field("format_version", &FORMAT_VERSION)?;
        if !self.records.is_empty() {
            state.serialize_field("contact", &self.records)?;
        }
        state.end()
    }
}
