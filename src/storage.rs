//! File-based persistence for the address book
//!
//! The whole book is written or read as one TOML document. Saves go through a
//! temporary file in the target directory that is then renamed over the old
//! file, so readers see either the previous or the new complete content.

use crate::book::{AddressBook, FORMAT_VERSION, VersionHeader};
use crate::error::{StorageError, StorageResult};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Default address book file name
pub const DEFAULT_FILE_NAME: &str = "addressbook.toml";

pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the address book, or an empty one if the file does not exist
    ///
    /// Any other read failure (permissions, not a file) is an error.
    pub fn load(&self) -> StorageResult<AddressBook> {
        let content = match fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.file_path.display(), "no address book file, starting empty");
                return Ok(AddressBook::new());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let header: VersionHeader =
            toml::from_str(&content).map_err(|source| self.parse_error(source))?;
        if header.format_version > FORMAT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                path: self.file_path.clone(),
                found: header.format_version,
                supported: FORMAT_VERSION,
            });
        }

        let book: AddressBook =
            toml::from_str(&content).map_err(|source| self.parse_error(source))?;
        info!(
            path = %self.file_path.display(),
            contacts = book.len(),
            "address book loaded"
        );
        Ok(book)
    }

    /// Write the whole address book, replacing the previous file
    pub fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let content = toml::to_string_pretty(book)?;

        let dir = match self.file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir).map_err(|source| self.io_error(source))?;
        temp.write_all(content.as_bytes())
            .map_err(|source| self.io_error(source))?;
        temp.as_file()
            .sync_all()
            .map_err(|source| self.io_error(source))?;
        debug!(temp = %temp.path().display(), "renaming temporary file into place");
        temp.persist(&self.file_path)
            .map_err(|e| self.io_error(e.error))?;

        info!(
            path = %self.file_path.display(),
            contacts = book.len(),
            "address book saved"
        );
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.file_path.clone(),
            source,
        }
    }

    fn parse_error(&self, source: toml::de::Error) -> StorageError {
        StorageError::Parse {
            path: self.file_path.clone(),
            source,
        }
    }
}
