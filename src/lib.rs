//! Contact Book Library
//!
//! A single-user contact manager: contacts have a name, any number of phone
//! numbers and an optional birthday. The book is kept in a TOML file between
//! sessions and can report whose birthday is coming up in the next week.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Command Layer**: `ContactBookHandler` - Parses commands and formats replies
//! - **Domain Layer**: `book` module - Validated fields, records and the address book
//! - **Persistence Layer**: `storage` module - File-based TOML storage
//!
//! # Example
//!
//! ```no_run
//! use contact_book::{ContactBookHandler, Reply};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut handler = ContactBookHandler::new("addressbook.toml")?;
//!     if let Reply::Text(text) = handler.execute("add John 1234567890")? {
//!         println!("{}", text);
//!     }
//!     handler.save()?;
//!     Ok(())
//! }
//! ```

pub mod book;
pub mod command;
pub mod error;
pub mod formatting;
pub mod handlers;
pub mod logging;
pub mod session;
pub mod storage;

use std::path::Path;
use tracing::debug;

// Re-export commonly used types
pub use book::{AddressBook, Birthday, Name, Phone, Record, UpcomingBirthday};
pub use command::Command;
pub use error::{BookError, BookResult, StorageError, StorageResult};
pub use storage::Storage;

/// Result of running one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show, then keep reading commands
    Text(String),
    /// Text to show, then save and stop
    Exit(String),
}

/// Command handler for the contact book
///
/// Owns the in-memory address book and the storage it was loaded from.
/// Changes stay in memory until `save` is called.
pub struct ContactBookHandler {
    pub(crate) book: AddressBook,
    pub(crate) storage: Storage,
}

impl ContactBookHandler {
    /// Create a handler, loading the book from `storage_path`
    ///
    /// # Arguments
    /// * `storage_path` - Path to the address book file (TOML format)
    ///
    /// # Returns
    /// The handler, with an empty book if the file does not exist yet
    pub fn new(storage_path: impl AsRef<Path>) -> StorageResult<Self> {
        let storage = Storage::new(storage_path);
        let book = storage.load()?;
        Ok(Self { book, storage })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Write the whole book to its file
    pub fn save(&self) -> StorageResult<()> {
        self.storage.save(&self.book)
    }

    /// Parse and run one line of user input
    pub fn execute(&mut self, line: &str) -> BookResult<Reply> {
        let command = Command::parse(line).inspect_err(|e| debug!("rejected command: {}", e))?;
        debug!(?command, "dispatching command");
        self.dispatch(command)
            .inspect_err(|e| debug!("command failed: {}", e))
    }

    fn dispatch(&mut self, command: Command) -> BookResult<Reply> {
        let text = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Help => formatting::HELP_TEXT.to_string(),
            Command::Add { name, phone } => self.handle_add(&name, &phone)?,
            Command::Change { name, old, new } => self.handle_change(&name, &old, &new)?,
            Command::Phone { name } => self.handle_phone(&name)?,
            Command::RemovePhone { name, phone } => self.handle_remove_phone(&name, &phone)?,
            Command::Delete { name } => self.handle_delete(&name)?,
            Command::All => self.handle_all(),
            Command::AddBirthday { name, date } => self.handle_add_birthday(&name, &date)?,
            Command::ShowBirthday { name } => self.handle_show_birthday(&name)?,
            Command::Birthdays => self.handle_birthdays(book::local_date_today()),
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
        };
        Ok(Reply::Text(text))
    }
}
