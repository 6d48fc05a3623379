//! Name value object.

use super::errors::ValidationError;
use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's display name, also used as its lookup key.
///
/// # Example
///
/// ```
/// use assistant_bot::domain::{Field, Name};
///
/// let name = Name::new("alice").unwrap();
/// assert_eq!(name.value(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    /// Create a new Name, rejecting the empty string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the provided name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Name {
    fn value(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
