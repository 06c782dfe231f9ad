//! PhoneNumber value object.

use super::errors::ValidationError;
use super::field::{Field, FieldRule};
use once_cell::sync::Lazy;
use regex::Regex;

// `\d` would also accept non-ASCII Unicode digits.
static TEN_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// Rule for phone numbers: exactly 10 ASCII digits, no separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhoneRule;

impl FieldRule for PhoneRule {
    type Value = String;

    fn parse(raw: &str) -> Result<String, ValidationError> {
        if !TEN_DIGITS.is_match(raw) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }
        Ok(raw.to_string())
    }

    fn render(value: &String) -> String {
        value.clone()
    }
}

/// A validated 10-digit phone number.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(PhoneNumber::new("123-456-7890").is_err());
/// ```
pub type PhoneNumber = Field<PhoneRule>;

impl Field<PhoneRule> {
    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        self.value()
    }
}
