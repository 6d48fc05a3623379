//! AddressBook model: every record, keyed by contact name.

use super::record::Record;
use indexmap::IndexMap;
use std::fmt;

/// The set of all contacts, keyed by name.
///
/// Records are always stored under their own name, so the key and
/// `record.name()` can never disagree. Iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name.
    ///
    /// An existing record with the same name is replaced wholesale; the
    /// name keeps its original position in the listing.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        self.records.insert(key, record);
    }

    /// Remove the record stored under `name` and describe the outcome.
    pub fn delete_record(&mut self, name: &str) -> String {
        match self.records.shift_remove(name) {
            Some(_) => format!("Record {} deleted.", name),
            None => format!("No record found for {}.", name),
        }
    }

    /// Exact-name lookup.
    pub fn find_record(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-name lookup for in-place edits.
    pub fn find_record_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Iterate records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One listing line per record.
impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}
