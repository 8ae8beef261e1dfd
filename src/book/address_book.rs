use crate::book::record::Record;
use tracing::debug;

/// Format version written to the address book file (current: 1)
pub const FORMAT_VERSION: u32 = 1;

/// All contacts, keyed by name
///
/// Records live in a Vec so the file and the `all` listing keep insertion
/// order. Lookups are linear, which is fine at address book scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBook {
    pub(crate) records: Vec<Record>,
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

// Serialize/Deserialize implementations are in serde_impl.rs

impl AddressBook {
    /// Create a new empty address book
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Insert a record, replacing any record with the same name
    ///
    /// A replaced record keeps its original position. No merging happens: the
    /// old phones and birthday are dropped.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(pos) => {
                debug!(name = record.name(), "replacing record");
                self.records[pos] = record;
            }
            None => {
                debug!(name = record.name(), "adding record");
                self.records.push(record);
            }
        }
    }

    /// Find a record by its exact name
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Find a record by its exact name and return a mutable reference
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Remove a record and return it. Absent names are a no-op.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let pos = self.position(name)?;
        debug!(name, "deleting record");
        Some(self.records.remove(pos))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }
}
