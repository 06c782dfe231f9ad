//! Domain value objects and types.
//!
//! This module contains the validated fields a contact is built from:
//! names, phone numbers and birthdays. All of them are instances of the
//! generic [`Field`] with a different [`FieldRule`], so an invalid value can
//! never be represented.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::{BirthdayDate, BirthdayRule};
pub use errors::ValidationError;
pub use field::{Field, FieldRule};
pub use name::{NameRule, PersonName};
pub use phone::{PhoneNumber, PhoneRule};
