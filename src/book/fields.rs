use crate::error::{BookError, BookResult};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Text format of a birthday, e.g. `15.06.1990`
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

const PHONE_DIGITS: usize = 10;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Contact name
///
/// Any non-empty text, kept exactly as given so lookups by the same string
/// always match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> BookResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(BookError::InvalidFormat {
                field: "name",
                value,
                expected: "a non-empty name",
            });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Phone number made of exactly ten ASCII digits
///
/// # Example
///
/// ```
/// use contact_book::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.to_string(), "0501234567");
/// assert!(Phone::new("050-123-45").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: impl Into<String>) -> BookResult<Self> {
        let value = value.into();
        if !Self::is_valid(&value) {
            return Err(BookError::InvalidFormat {
                field: "phone",
                value,
                expected: "exactly 10 digits",
            });
        }
        Ok(Self(value))
    }

    fn is_valid(value: &str) -> bool {
        value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Birthday as a calendar date, written `DD.MM.YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday, rejecting impossible dates such as `31.04.2024`.
    pub fn new(value: &str) -> BookResult<Self> {
        NaiveDate::parse_from_str(value.trim(), BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| BookError::InvalidFormat {
                field: "birthday",
                value: value.to_string(),
                expected: "a real date in DD.MM.YYYY format",
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl FromStr for Name {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for Phone {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for Birthday {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Fields are stored as their text form and validated again when read back.

impl Serialize for Name {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl Serialize for Phone {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl Serialize for Birthday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_keeps_text_as_given() {
        let name = Name::new("  John ").unwrap();
        assert_eq!(name.as_str(), "  John ");
        assert_eq!(Name::new("Mary Ann").unwrap().to_string(), "Mary Ann");
    }

    #[test]
    fn test_name_rejects_empty() {
        assert!(matches!(
            Name::new(""),
            Err(BookError::InvalidFormat { field: "name", .. })
        ));
    }

    #[test]
    fn test_phone_valid() {
        let phone = Phone::new("1234567890").unwrap();
        assert_eq!(phone.as_str(), "1234567890");
        assert_eq!(format!("{}", phone), "1234567890");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::new("").is_err());
        assert!(Phone::new("123456789").is_err());
        assert!(Phone::new("12345678901").is_err());
        assert!(Phone::new("12345abcde").is_err());
        assert!(Phone::new("+123456789").is_err());
        assert!(Phone::new(" 123456789").is_err());
        // non-ASCII digits do not count
        assert!(Phone::new("١٢٣٤٥٦٧٨٩٠").is_err());
    }

    #[test]
    fn test_birthday_parses_real_dates() {
        let birthday = Birthday::new("15.06.1990").unwrap();
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
        );
        assert_eq!(birthday.to_string(), "15.06.1990");

        assert!(Birthday::new("29.02.2024").is_ok());
        assert!(Birthday::new("29.02.2023").is_err());
        assert!(Birthday::new("31.04.2024").is_err());
    }

    #[test]
    fn test_birthday_rejects_wrong_format() {
        assert!(Birthday::new("31-01-2024").is_err());
        assert!(Birthday::new("2024.01.31").is_err());
        assert!(Birthday::new("31.01.2024 extra").is_err());
        assert!(Birthday::new("").is_err());
    }

    #[test]
    fn test_birthday_renders_zero_padded() {
        let birthday = Birthday::from(NaiveDate::from_ymd_opt(2001, 2, 3).unwrap());
        assert_eq!(birthday.to_string(), "03.02.2001");
    }
}
