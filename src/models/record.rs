//! Contact record: a name, its phone numbers and an optional birthday.

use crate::domain::{BirthdayDate, PersonName, PhoneNumber, ValidationError};
use crate::error::{ContactBookError, ContactBookResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Result of [`ContactRecord::add_phone`].
///
/// A rejected phone is a normal outcome, not an error, so that a caller
/// importing many numbers is not stopped by one bad entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddPhoneOutcome {
    /// The phone was appended.
    Added(String),
    /// The phone failed validation; the record is unchanged.
    Rejected(ValidationError),
}

impl AddPhoneOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}

impl fmt::Display for AddPhoneOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added(phone) => write!(f, "Phone number {} added successfully", phone),
            Self::Rejected(err) => write!(f, "Error: {}", err),
        }
    }
}

/// Result of [`ContactRecord::remove_phone`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovePhoneOutcome {
    Removed(String),
    NotFound(String),
}

impl RemovePhoneOutcome {
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed(_))
    }
}

impl fmt::Display for RemovePhoneOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Removed(phone) => write!(f, "Phone number {} removed successfully", phone),
            Self::NotFound(phone) => write!(f, "Phone number {} not found", phone),
        }
    }
}

/// A contact in the book.
///
/// The name is fixed at construction since the book keys records by it.
/// Phones keep insertion order and may contain duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: PersonName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default)]
    birthday: BirthdayDate,
}

impl ContactRecord {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the name is blank or the birthday is
    /// present but not a valid `YYYY-MM-DD` date.
    pub fn new(name: &str, birthday: Option<&str>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: PersonName::new(name)?,
            phones: Vec::new(),
            birthday: BirthdayDate::from_optional(birthday)?,
        })
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn birthday(&self) -> &BirthdayDate {
        &self.birthday
    }

    /// Replace the birthday, validating the new value first.
    pub fn set_birthday(&mut self, birthday: Option<&str>) -> Result<(), ValidationError> {
        self.birthday = BirthdayDate::from_optional(birthday)?;
        Ok(())
    }

    /// Days from `today` to the next birthday, if one is recorded.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.days_until_next_birthday(today)
    }

    /// Validate and append a phone number.
    pub fn add_phone(&mut self, phone: &str) -> AddPhoneOutcome {
        match PhoneNumber::new(phone) {
            Ok(number) => {
                debug!(contact = %self.name, phone = %number, "Phone added");
                self.phones.push(number);
                AddPhoneOutcome::Added(phone.to_string())
            }
            Err(e) => {
                warn!(contact = %self.name, error = %e, "Phone rejected");
                AddPhoneOutcome::Rejected(e)
            }
        }
    }

    /// Remove the first phone equal to `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> RemovePhoneOutcome {
        match self.position(phone) {
            Some(index) => {
                self.phones.remove(index);
                debug!(contact = %self.name, phone = %phone, "Phone removed");
                RemovePhoneOutcome::Removed(phone.to_string())
            }
            None => RemovePhoneOutcome::NotFound(phone.to_string()),
        }
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// # Errors
    ///
    /// - `ContactBookError::PhoneNotFound` if `old` is not on the record
    /// - `ContactBookError::Validation` if `new` is not a valid phone; the
    ///   record is left unchanged
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ContactBookResult<()> {
        let index = self
            .position(old)
            .ok_or_else(|| ContactBookError::PhoneNotFound(old.to_string()))?;
        self.phones[index].replace(new)?;
        debug!(contact = %self.name, old = %old, new = %new, "Phone edited");
        Ok(())
    }

    /// The first phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Rendered phone values in insertion order.
    pub fn phones(&self) -> Vec<String> {
        self.phones.iter().map(PhoneNumber::render).collect()
    }

    pub fn phone_numbers(&self) -> &[PhoneNumber] {
        &self.phones
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            self.phones().join("; "),
            self.birthday
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> ContactRecord {
        let mut record = ContactRecord::new("John", None).unwrap();
        record.add_phone("1234567890");
        record.add_phone("5555555555");
        record
    }

    #[test]
    fn test_record_new_validates() {
        assert_eq!(
            ContactRecord::new("  ", None),
            Err(ValidationError::EmptyName)
        );
        assert!(ContactRecord::new("John", Some("2000-02-30")).is_err());

        let record = ContactRecord::new(" John ", Some("2000-05-20")).unwrap();
        assert_eq!(record.name().as_str(), "John");
        assert!(record.birthday().is_present());
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_add_phone_outcomes() {
        let mut record = ContactRecord::new("John", None).unwrap();

        let outcome = record.add_phone("1234567890");
        assert!(outcome.is_added());
        assert_eq!(outcome.to_string(), "Phone number 1234567890 added successfully");

        let outcome = record.add_phone("12345");
        assert!(!outcome.is_added());
        assert!(outcome.to_string().starts_with("Error: Invalid number"));
        assert_eq!(record.phones(), vec!["1234567890"]);
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = ContactRecord::new("John", None).unwrap();
        record.add_phone("1234567890");
        record.add_phone("1234567890");
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn test_remove_phone() {
        let mut record = john();

        let outcome = record.remove_phone("1234567890");
        assert!(outcome.is_removed());
        assert_eq!(outcome.to_string(), "Phone number 1234567890 removed successfully");
        assert_eq!(record.phones(), vec!["5555555555"]);

        let outcome = record.remove_phone("1234567890");
        assert!(!outcome.is_removed());
        assert_eq!(outcome.to_string(), "Phone number 1234567890 not found");
        assert_eq!(record.phones(), vec!["5555555555"]);
    }

    #[test]
    fn test_remove_phone_takes_first_duplicate() {
        let mut record = ContactRecord::new("John", None).unwrap();
        record.add_phone("1111111111");
        record.add_phone("2222222222");
        record.add_phone("1111111111");

        record.remove_phone("1111111111");
        assert_eq!(record.phones(), vec!["2222222222", "1111111111"]);
    }

    #[test]
    fn test_edit_phone_keeps_position() {
        let mut record = john();
        record.edit_phone("1234567890", "1112223333").unwrap();
        assert_eq!(record.phones(), vec!["1112223333", "5555555555"]);
        assert!(record.find_phone("1112223333").is_some());
        assert!(record.find_phone("1234567890").is_none());
    }

    #[test]
    fn test_edit_phone_missing_old() {
        let mut record = john();
        let result = record.edit_phone("0000000000", "1112223333");
        assert_eq!(
            result,
            Err(ContactBookError::PhoneNotFound("0000000000".to_string()))
        );
        assert_eq!(record.phones(), vec!["1234567890", "5555555555"]);
    }

    #[test]
    fn test_edit_phone_validates_new_value() {
        let mut record = john();
        let result = record.edit_phone("1234567890", "not-a-phone");
        assert!(matches!(result, Err(ContactBookError::Validation(_))));
        assert_eq!(record.phones(), vec!["1234567890", "5555555555"]);
    }

    #[test]
    fn test_find_phone() {
        let record = john();
        let found = record.find_phone("5555555555").unwrap();
        assert_eq!(found.as_str(), "5555555555");
        assert!(record.find_phone("9999999999").is_none());
        assert!(record.find_phone("garbage").is_none());
    }

    #[test]
    fn test_set_birthday_validates() {
        let mut record = john();
        assert!(record.set_birthday(Some("2000-99-99")).is_err());
        assert!(!record.birthday().is_present());

        record.set_birthday(Some("1999-12-31")).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        assert_eq!(record.days_to_birthday(today), Some(1));

        record.set_birthday(None).unwrap();
        assert_eq!(record.days_to_birthday(today), None);
    }

    #[test]
    fn test_record_display() {
        let record = john();
        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555, birthday: None"
        );

        let mut record = ContactRecord::new("Jane", Some("1990-01-15")).unwrap();
        record.add_phone("9876543210");
        assert_eq!(
            record.to_string(),
            "Contact name: Jane, phones: 9876543210, birthday: 1990-01-15"
        );
    }

    #[test]
    fn test_record_serialization() {
        let mut record = ContactRecord::new("Jane", Some("1990-01-15")).unwrap();
        record.add_phone("9876543210");

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Jane","phones":["9876543210"],"birthday":"1990-01-15"}"#
        );

        let parsed: ContactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_deserialization_validates() {
        let parsed: ContactRecord = serde_json::from_str(r#"{"name":"Bob"}"#).unwrap();
        assert!(parsed.phones().is_empty());
        assert!(!parsed.birthday().is_present());

        let result: Result<ContactRecord, _> =
            serde_json::from_str(r#"{"name":"Bob","phones":["123"]}"#);
        assert!(result.is_err());

        let result: Result<ContactRecord, _> = serde_json::from_str(r#"{"name":" "}"#);
        assert!(result.is_err());
    }
}
