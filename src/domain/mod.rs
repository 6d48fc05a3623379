//! Domain value objects and types.
//!
//! This module contains the typed fields a contact is made of. Value
//! objects validate at construction time so an invalid phone number can
//! never be stored in a record.

pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
