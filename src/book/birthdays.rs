//! Upcoming birthday queries for AddressBook
//!
//! Finds contacts whose next birthday falls within the coming week and works
//! out the day to congratulate them, moving weekend birthdays to Monday.

use super::address_book::AddressBook;
use super::fields::{BIRTHDAY_FORMAT, local_date_today};
use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

/// How many days ahead the birthday window reaches (inclusive)
pub const BIRTHDAY_WINDOW_DAYS: i64 = 7;

/// A contact to congratulate soon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: String,
    /// Day to congratulate on; a weekend birthday moves to the next Monday
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(BIRTHDAY_FORMAT)
        )
    }
}

/// Next occurrence of `birthday`'s month and day on or after `today`
///
/// 29 February falls back to 28 February in non-leap years.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> Option<NaiveDate> {
    let this_year = anniversary_in(birthday, today.year())?;
    if this_year >= today {
        Some(this_year)
    } else {
        anniversary_in(birthday, today.year() + 1)
    }
}

fn anniversary_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// Move a Saturday or Sunday forward to the following Monday
pub fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let weekday = i64::from(date.weekday().num_days_from_monday());
    if weekday >= 5 {
        date + Duration::days((7 - weekday) % 7)
    } else {
        date
    }
}

impl AddressBook {
    /// Contacts with a birthday within the next week, counted from `today`
    ///
    /// # Arguments
    /// * `today` - The reference date; today itself is part of the window
    ///
    /// # Returns
    /// Entries in address book order. Contacts without a birthday are skipped.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?.date();
                let next = next_occurrence(birthday, today)?;
                let days_until = (next - today).num_days();
                if !(0..=BIRTHDAY_WINDOW_DAYS).contains(&days_until) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: shift_off_weekend(next),
                })
            })
            .collect()
    }

    /// Upcoming birthdays counted from the local calendar date
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(local_date_today())
    }
}
