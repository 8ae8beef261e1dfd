//! Contact and phone handlers

use crate::ContactBookHandler;
use crate::book::Record;
use crate::error::{BookError, BookResult};
use crate::formatting;
use tracing::debug;

impl ContactBookHandler {
    /// Add a contact with one phone, or add the phone to an existing contact.
    ///
    /// The phone is validated before a new contact is created, so a bad
    /// number never leaves an empty contact behind.
    pub fn handle_add(&mut self, name: &str, phone: &str) -> BookResult<String> {
        if let Some(record) = self.book.find_mut(name) {
            record.add_phone(phone)?;
            debug!(name, "phone added to existing contact");
            return Ok("Contact updated.".to_string());
        }

        let mut record = Record::new(name)?;
        record.add_phone(phone)?;
        self.book.add_record(record);
        Ok("Contact added.".to_string())
    }

    /// Replace one of a contact's phones
    pub fn handle_change(&mut self, name: &str, old: &str, new: &str) -> BookResult<String> {
        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| BookError::contact_not_found(name))?;
        record.edit_phone(old, new)?;
        Ok("Contact updated.".to_string())
    }

    pub fn handle_phone(&self, name: &str) -> BookResult<String> {
        let record = self
            .book
            .find(name)
            .ok_or_else(|| BookError::contact_not_found(name))?;
        Ok(formatting::format_phones(record))
    }

    /// Remove every copy of a phone from a contact
    pub fn handle_remove_phone(&mut self, name: &str, phone: &str) -> BookResult<String> {
        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| BookError::contact_not_found(name))?;
        if record.remove_phone(phone) == 0 {
            return Err(BookError::phone_not_found(phone));
        }
        Ok("Phone removed.".to_string())
    }

    pub fn handle_delete(&mut self, name: &str) -> BookResult<String> {
        match self.book.delete(name) {
            Some(_) => Ok("Contact deleted.".to_string()),
            None => Err(BookError::contact_not_found(name)),
        }
    }

    pub fn handle_all(&self) -> String {
        formatting::format_contacts(self.book.records())
    }
}
