//! Shared behaviour of contact fields.

use std::fmt;

/// A typed, immutable value attached to a contact.
///
/// Every field renders as its raw string value, so `to_string()` on a field
/// is what the address book compares and prints.
pub trait Field: fmt::Display {
    /// The underlying value.
    fn value(&self) -> &str;

    /// Whether the rendered value equals `candidate` exactly.
    fn matches(&self, candidate: &str) -> bool {
        self.value() == candidate
    }
}
