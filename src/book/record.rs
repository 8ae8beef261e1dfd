use crate::book::fields::{Birthday, Name, Phone};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book
///
/// A record starts with a name only. Phones keep their insertion order and may
/// repeat; the birthday is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday
    pub fn new(name: &str) -> BookResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, number: &str) -> BookResult<()> {
        let phone = Phone::new(number)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `number`
    ///
    /// # Returns
    /// How many phones were removed (zero when the number was absent)
    pub fn remove_phone(&mut self, number: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != number);
        before - self.phones.len()
    }

    /// Replace the first phone equal to `old` with `new`
    ///
    /// The phone list is left untouched when `old` is missing or `new` is
    /// not a valid phone number.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let pos = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| BookError::phone_not_found(old))?;
        self.phones[pos] = Phone::new(new)?;
        Ok(())
    }

    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Set the birthday, replacing any previous one
    pub fn add_birthday(&mut self, date: &str) -> BookResult<()> {
        self.birthday = Some(Birthday::new(date)?);
        Ok(())
    }

    pub fn show_birthday(&self) -> String {
        match &self.birthday {
            Some(birthday) => format!("{}'s birthday: {}", self.name, birthday),
            None => format!("No birthday set for {}.", self.name),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
