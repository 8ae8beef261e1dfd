//! Formatting helper functions for contact book replies
//!
//! This module turns query results into the text shown to the user.

use crate::book::{Record, UpcomingBirthday};

/// Command summary printed by `help`
pub const HELP_TEXT: &str = "\
Available commands:
  hello                                   Greet the assistant
  add <name> <phone>                      Add a contact or a phone to an existing contact
  change <name> <old_phone> <new_phone>   Replace a phone number
  phone <name>                            Show a contact's phones
  remove-phone <name> <phone>             Remove a phone number from a contact
  delete <name>                           Delete a contact
  all                                     Show all contacts
  add-birthday <name> <DD.MM.YYYY>        Set a contact's birthday
  show-birthday <name>                    Show a contact's birthday
  birthdays                               Show birthdays in the next 7 days
  help                                    Show this help message
  close | exit                            Save and quit";

/// Format every record on its own line
pub fn format_contacts<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    let lines: Vec<String> = records.into_iter().map(|r| r.to_string()).collect();
    if lines.is_empty() {
        return "No contacts saved.".to_string();
    }
    lines.join("\n")
}

/// Format the phones of a single record
pub fn format_phones(record: &Record) -> String {
    if record.phones().is_empty() {
        return format!("No phones saved for {}.", record.name());
    }
    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    format!("{}: {}", record.name(), phones.join("; "))
}

/// Format upcoming birthdays, one `name: dd.mm.yyyy` per line
pub fn format_upcoming_birthdays(upcoming: &[UpcomingBirthday]) -> String {
    if upcoming.is_empty() {
        return "No upcoming birthdays in the next 7 days.".to_string();
    }
    upcoming
        .iter()
        .map(|u| u.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
