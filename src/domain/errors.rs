//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or whitespace only.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday is not a real `YYYY-MM-DD` date.
    InvalidBirthday(String),
}

impl ValidationError {
    /// Name of the field whose rule was violated.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
            Self::InvalidPhone(_) => "phone",
            Self::InvalidBirthday(_) => "birthday",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => {
                write!(f, "First name is required and must be a non-empty string")
            }
            Self::InvalidPhone(phone) => {
                write!(f, "Invalid number: {:?} must be exactly 10 digits", phone)
            }
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid date format. Use YYYY-MM-DD. Got: {:?}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_names_input() {
        let err = ValidationError::InvalidPhone("12345".to_string());
        assert!(err.to_string().starts_with("Invalid number"));
        assert!(err.to_string().contains("12345"));

        let err = ValidationError::InvalidBirthday("2000-13-01".to_string());
        assert!(err.to_string().contains("YYYY-MM-DD"));
        assert!(err.to_string().contains("2000-13-01"));
    }

    #[test]
    fn test_validation_error_field() {
        assert_eq!(ValidationError::EmptyName.field(), "name");
        assert_eq!(ValidationError::InvalidPhone(String::new()).field(), "phone");
        assert_eq!(
            ValidationError::InvalidBirthday(String::new()).field(),
            "birthday"
        );
    }
}
