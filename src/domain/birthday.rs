//! BirthdayDate value object.

use super::errors::ValidationError;
use super::field::{Field, FieldRule};
use crate::clock::Clock;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

const DATE_FORMAT: &str = "%Y-%m-%d";

// chrono's parser skips padding and accepts signed or short years.
static ISO_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("birthday pattern is valid")
});

/// Rule for birthdays: absent, or a real calendar date in `YYYY-MM-DD`.
///
/// Empty input means "no birthday recorded".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthdayRule;

impl FieldRule for BirthdayRule {
    type Value = Option<NaiveDate>;

    fn parse(raw: &str) -> Result<Option<NaiveDate>, ValidationError> {
        if raw.is_empty() {
            return Ok(None);
        }
        if !ISO_DATE.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Some)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))
    }

    fn render(value: &Option<NaiveDate>) -> String {
        match value {
            Some(date) => date.format(DATE_FORMAT).to_string(),
            None => "None".to_string(),
        }
    }
}

/// An optional birthday.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use contact_book::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::new("2000-05-20").unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
/// assert_eq!(birthday.days_until_next_birthday(today), Some(10));
/// ```
pub type BirthdayDate = Field<BirthdayRule>;

impl Field<BirthdayRule> {
    /// A birthday field with no date recorded.
    pub fn absent() -> Self {
        // Empty input always parses to `None`.
        Self::new("").unwrap_or_else(|_| unreachable!())
    }

    /// Build from optional input; `None` means no birthday.
    pub fn from_optional(raw: Option<&str>) -> Result<Self, ValidationError> {
        Self::new(raw.unwrap_or_default())
    }

    /// The recorded date, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        *self.value()
    }

    /// Whether a date is recorded.
    pub fn is_present(&self) -> bool {
        self.value().is_some()
    }

    /// Days from `today` until the next occurrence of the birthday.
    ///
    /// Returns `0` when `today` is the birthday and `None` when no date is
    /// recorded. A Feb 29 birthday is observed on Feb 28 in non-leap years.
    /// Also `None` if the next occurrence falls past [`NaiveDate::MAX`].
    pub fn days_until_next_birthday(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.date()?;
        let mut next = occurrence_in(birthday, today.year())?;
        if next < today {
            next = occurrence_in(birthday, today.year() + 1)?;
        }
        Some((next - today).num_days())
    }

    /// [`days_until_next_birthday`](Self::days_until_next_birthday) using
    /// `clock` for the current date.
    pub fn days_until_next_birthday_from(&self, clock: &dyn Clock) -> Option<i64> {
        self.days_until_next_birthday(clock.today())
    }
}

fn occurrence_in(birthday: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

impl Default for Field<BirthdayRule> {
    fn default() -> Self {
        Self::absent()
    }
}
