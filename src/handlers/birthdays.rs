//! Birthday handlers

use crate::ContactBookHandler;
use crate::error::{BookError, BookResult};
use crate::formatting;
use chrono::NaiveDate;

impl ContactBookHandler {
    pub fn handle_add_birthday(&mut self, name: &str, date: &str) -> BookResult<String> {
        let record = self
            .book
            .find_mut(name)
            .ok_or_else(|| BookError::contact_not_found(name))?;
        record.add_birthday(date)?;
        Ok("Birthday added.".to_string())
    }

    pub fn handle_show_birthday(&self, name: &str) -> BookResult<String> {
        let record = self
            .book
            .find(name)
            .ok_or_else(|| BookError::contact_not_found(name))?;
        Ok(record.show_birthday())
    }

    /// List who to congratulate during the week starting at `today`
    pub fn handle_birthdays(&self, today: NaiveDate) -> String {
        formatting::format_upcoming_birthdays(&self.book.upcoming_birthdays(today))
    }
}
