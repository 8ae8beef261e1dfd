//! Contact book domain models and business logic
//!
//! Split into submodules:
//! - `fields`: validated field types (name, phone, birthday)
//! - `record`: a single contact with its phones and birthday
//! - `address_book`: the name-keyed collection of records
//! - `birthdays`: upcoming birthday queries for AddressBook
//! - `serde_impl`: serialization/deserialization implementations

mod address_book;
mod birthdays;
mod fields;
mod record;
mod serde_impl;

// Re-export all public types
pub use address_book::{AddressBook, FORMAT_VERSION};
pub use birthdays::{BIRTHDAY_WINDOW_DAYS, UpcomingBirthday, next_occurrence, shift_off_weekend};
pub use fields::{BIRTHDAY_FORMAT, Birthday, Name, Phone, local_date_today};
pub use record::Record;
pub(crate) use serde_impl::VersionHeader;
