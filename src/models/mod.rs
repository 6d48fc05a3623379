//! Data models for the address book.
//!
//! A [`Record`] is one contact; the [`AddressBook`] owns every record and
//! keys it by name.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::{PhoneEdit, Record, PHONE_SEPARATOR};
