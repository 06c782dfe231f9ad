//! Generic validated field.
//!
//! Every value object in the contact book is a [`Field`] parameterized by a
//! [`FieldRule`]. The rule owns parsing (which is also validation) and
//! rendering; the field only guarantees that a stored value has passed the
//! rule. New field kinds plug in by implementing [`FieldRule`] on a marker
//! type and aliasing `Field<ThatRule>`.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Validation and rendering strategy for a [`Field`].
pub trait FieldRule {
    /// The validated representation stored inside the field.
    type Value: Clone + fmt::Debug + PartialEq + Eq + Hash;

    /// Parse raw input into a validated value.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` describing the violated rule.
    fn parse(raw: &str) -> Result<Self::Value, ValidationError>;

    /// Canonical string form of a validated value.
    fn render(value: &Self::Value) -> String;
}

/// A value that has passed its rule.
///
/// There is no way to put a value into a `Field` without going through
/// [`FieldRule::parse`], both at construction and on [`Field::replace`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field<R: FieldRule> {
    value: R::Value,
    _rule: PhantomData<R>,
}

impl<R: FieldRule> Field<R> {
    /// Validate `raw` and wrap the result.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `raw` violates the rule.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = R::parse(raw.as_ref())?;
        Ok(Self {
            value,
            _rule: PhantomData,
        })
    }

    /// Replace the stored value, re-running the rule on `raw`.
    ///
    /// On error the field keeps its previous value.
    pub fn replace(&mut self, raw: impl AsRef<str>) -> Result<(), ValidationError> {
        self.value = R::parse(raw.as_ref())?;
        Ok(())
    }

    /// Borrow the validated value.
    pub fn value(&self) -> &R::Value {
        &self.value
    }

    /// Convert into the validated value.
    pub fn into_inner(self) -> R::Value {
        self.value
    }

    /// Canonical string form of the stored value.
    pub fn render(&self) -> String {
        R::render(&self.value)
    }
}

impl<R: FieldRule> fmt::Display for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// Serde support - serialize the validated value as-is
impl<R> Serialize for Field<R>
where
    R: FieldRule,
    R::Value: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from string (or null) through the rule
impl<'de, R: FieldRule> Deserialize<'de> for Field<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Field::new(raw.unwrap_or_default()).map_err(serde::de::Error::custom)
    }
}
