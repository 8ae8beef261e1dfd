//! Command handlers for the contact book
//!
//! Each handler runs one command against the address book and returns the
//! reply text. Handlers never print.

pub mod birthdays;
pub mod contacts;
