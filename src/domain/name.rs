//! PersonName value object.

use super::errors::ValidationError;
use super::field::{Field, FieldRule};

/// Rule for contact names: trimmed, non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameRule;

impl FieldRule for NameRule {
    type Value = String;

    fn parse(raw: &str) -> Result<String, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(trimmed.to_string())
    }

    fn render(value: &String) -> String {
        value.clone()
    }
}

/// A contact's name, also its key in the book.
///
/// # Example
///
/// ```
/// use contact_book::domain::PersonName;
///
/// let name = PersonName::new("  John ").unwrap();
/// assert_eq!(name.as_str(), "John");
/// ```
pub type PersonName = Field<NameRule>;

impl Field<NameRule> {
    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.value()
    }
}
