//! Record model: one contact with its phone numbers.

use crate::domain::{Field, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used whenever a phone list is rendered as a single string.
pub const PHONE_SEPARATOR: &str = ";";

/// A contact: a name plus an ordered list of phone numbers.
///
/// The first phone is treated as the contact's primary number. Duplicates
/// are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
}

/// Phone lists before and after an [`Record::edit_phone`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneEdit {
    pub before: String,
    pub after: String,
}

impl Record {
    /// Create a record with a name and its first phone number.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if the name is empty or the phone is not
    /// a 10-digit number.
    pub fn new(name: &str, phone: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: vec![Phone::new(phone)?],
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The primary (first) phone, if any remain.
    pub fn first_phone(&self) -> Option<&Phone> {
        self.phones.first()
    }

    /// Validate and append a phone number. Duplicates are not checked.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Removing an absent number is a no-op.
    pub fn delete_phone(&mut self, phone: &str) {
        self.phones.retain(|p| !p.matches(phone));
    }

    /// First phone equal to `phone`, scanning in insertion order.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.matches(phone))
    }

    /// Replace every occurrence of `old` with `new`.
    ///
    /// `new` is appended even when `old` is not present. Occurrences of `old`
    /// are removed before `new` is validated, so a rejected edit still drops
    /// the old number.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<PhoneEdit, ValidationError> {
        let before = self.joined_phones();

        self.delete_phone(old);
        self.add_phone(new)?;

        Ok(PhoneEdit {
            before,
            after: self.joined_phones(),
        })
    }

    /// All phones joined with [`PHONE_SEPARATOR`].
    pub fn joined_phones(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(PHONE_SEPARATOR)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.joined_phones()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record::new("alice", "1234567890").unwrap()
    }

    #[test]
    fn test_new_record() {
        let r = record();
        assert_eq!(r.name().as_str(), "alice");
        assert_eq!(r.phones().len(), 1);
        assert_eq!(r.first_phone().unwrap().as_str(), "1234567890");
    }

    #[test]
    fn test_new_record_rejects_bad_phone() {
        assert_eq!(
            Record::new("alice", "12345"),
            Err(ValidationError::InvalidPhone("12345".to_string()))
        );
    }

    #[test]
    fn test_add_phone_appends_duplicates() {
        let mut r = record();
        r.add_phone("5551234567").unwrap();
        r.add_phone("1234567890").unwrap();
        assert_eq!(r.joined_phones(), "1234567890;5551234567;1234567890");
    }

    #[test]
    fn test_add_phone_invalid_leaves_record_unchanged() {
        let mut r = record();
        assert!(r.add_phone("abc").is_err());
        assert_eq!(r.phones().len(), 1);
    }

    #[test]
    fn test_delete_phone_removes_all_matches() {
        let mut r = record();
        r.add_phone("5551234567").unwrap();
        r.add_phone("1234567890").unwrap();

        r.delete_phone("1234567890");
        assert_eq!(r.joined_phones(), "5551234567");

        r.delete_phone("0000000000");
        assert_eq!(r.joined_phones(), "5551234567");
    }

    #[test]
    fn test_find_phone() {
        let mut r = record();
        r.add_phone("5551234567").unwrap();

        assert_eq!(r.find_phone("5551234567").unwrap().as_str(), "5551234567");
        assert!(r.find_phone("9999999999").is_none());
    }

    #[test]
    fn test_edit_phone_replaces() {
        let mut r = record();
        let edit = r.edit_phone("1234567890", "0987654321").unwrap();

        assert_eq!(edit.before, "1234567890");
        assert_eq!(edit.after, "0987654321");
        assert_eq!(r.first_phone().unwrap().as_str(), "0987654321");
    }

    #[test]
    fn test_edit_phone_missing_old_still_appends() {
        let mut r = record();
        r.edit_phone("1111111111", "2222222222").unwrap();

        assert_eq!(r.phones().len(), 2);
        assert!(r.find_phone("2222222222").is_some());
        assert_eq!(r.first_phone().unwrap().as_str(), "1234567890");
    }

    #[test]
    fn test_edit_phone_size_accounts_for_removed_duplicates() {
        let mut r = record();
        r.add_phone("1234567890").unwrap();
        r.add_phone("5551234567").unwrap();

        r.edit_phone("1234567890", "0987654321").unwrap();
        // 3 phones - 2 matching old + 1 new
        assert_eq!(r.joined_phones(), "5551234567;0987654321");
    }

    #[test]
    fn test_edit_phone_invalid_new_drops_old() {
        let mut r = record();
        r.add_phone("5551234567").unwrap();

        assert!(r.edit_phone("1234567890", "bad").is_err());
        assert_eq!(r.joined_phones(), "5551234567");

        assert!(r.edit_phone("5551234567", "bad").is_err());
        assert!(r.phones().is_empty());
        assert!(r.first_phone().is_none());
    }

    #[test]
    fn test_display() {
        let mut r = record();
        r.add_phone("5551234567").unwrap();
        assert_eq!(
            r.to_string(),
            "Contact name: alice, phones: 1234567890;5551234567"
        );
    }

    #[test]
    fn test_display_without_phones() {
        let mut r = record();
        r.delete_phone("1234567890");
        assert_eq!(r.to_string(), "Contact name: alice, phones: ");
        assert!(r.first_phone().is_none());
    }

    #[test]
    fn test_serialization_shape() {
        let r = record();
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "alice", "phones": ["1234567890"] })
        );
    }

    #[test]
    fn test_deserialization_validates_phones() {
        let bad = r#"{ "name": "alice", "phones": ["12"] }"#;
        assert!(serde_json::from_str::<Record>(bad).is_err());
    }
}
