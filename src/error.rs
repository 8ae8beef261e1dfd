//! Error types for the contact book.
//!
//! Every error here is recoverable: the command loop reports it as text and
//! keeps running.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by field validation, the address book and the command layer.
///
/// File access has its own error type, `StorageError`.
#[derive(Error, Debug)]
pub enum BookError {
    /// A name, phone or birthday failed its format rule
    #[error("Invalid {field} '{value}': expected {expected}")]
    InvalidFormat {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// A contact or phone number is not in the book
    #[error("{what} '{key}' not found")]
    NotFound { what: &'static str, key: String },

    /// A command was given the wrong number of arguments
    #[error("Wrong arguments for '{command}'. Usage: {usage}")]
    MalformedCommand {
        command: String,
        usage: &'static str,
    },

    /// The command word is not recognized
    #[error("Invalid command '{0}'. Type 'help' for the list of commands")]
    UnknownCommand(String),
}

impl BookError {
    pub(crate) fn contact_not_found(name: &str) -> Self {
        Self::NotFound {
            what: "Contact",
            key: name.to_string(),
        }
    }

    pub(crate) fn phone_not_found(phone: &str) -> Self {
        Self::NotFound {
            what: "Phone",
            key: phone.to_string(),
        }
    }
}

/// Errors raised while loading or saving the address book file.
///
/// A missing file is not an error; `Storage::load` returns an empty book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem access failed
    #[error("Failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a valid address book
    #[error("Address book '{}' is corrupt: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The in-memory book could not be encoded
    #[error("Failed to encode address book: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The file was written by a newer version of the program
    #[error(
        "Address book '{}' has format version {found}, but only versions up to {supported} are supported",
        .path.display()
    )]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        supported: u32,
    },
}

/// Result alias for address book operations.
pub type BookResult<T> = Result<T, BookError>;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
