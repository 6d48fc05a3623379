//! Command handlers.
//!
//! Each handler receives the positional arguments and the address book and
//! returns the text to print. Some outcomes are reported as inline replies
//! ("Error: Name not found.") and others as a [`CommandError`] that the
//! dispatcher translates; both styles are part of the observable protocol.

use crate::error::{CommandError, CommandResult, INVALID_FORMAT_MESSAGE};
use crate::models::{AddressBook, Record};
use tracing::info;

pub const GREETING: &str = "How can I help you?";
pub const INVALID_COMMAND: &str = "Invalid command.";

const NAME_NOT_FOUND_INLINE: &str = "Error: Name not found.";

/// Fail with `NotEnoughArgs` when fewer than `expected` arguments were given.
fn require_args(args: &[String], expected: usize) -> Result<(), CommandError> {
    if args.len() < expected {
        return Err(CommandError::NotEnoughArgs {
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// `hello`
pub fn greet() -> CommandResult {
    Ok(GREETING.to_string())
}

/// `add <name> <phone>`: insert or replace a contact.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    let [name, phone, ..] = args else {
        return Ok(INVALID_FORMAT_MESSAGE.to_string());
    };

    let record = Record::new(name, phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old_phone> <new_phone>`
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    require_args(args, 3)?;
    if args.len() > 3 {
        return Err(CommandError::InvalidFormat(format!(
            "change takes 3 arguments, got {}",
            args.len()
        )));
    }

    let (name, old_phone, new_phone) = (&args[0], &args[1], &args[2]);
    match book.find_record_mut(name) {
        Some(record) => {
            let edit = record.edit_phone(old_phone, new_phone)?;
            info!(
                contact = %name,
                "Contact updated. Original phone: {}, New phone {}",
                edit.before,
                edit.after
            );
            Ok("Contact updated.".to_string())
        }
        None => Ok(NAME_NOT_FOUND_INLINE.to_string()),
    }
}

/// `phone <name>`: the contact's first phone.
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult {
    require_args(args, 1)?;
    let name = &args[0];

    let Some(record) = book.find_record(name) else {
        return Ok(NAME_NOT_FOUND_INLINE.to_string());
    };

    // A record emptied by a failed `change` has no primary phone to show
    record
        .first_phone()
        .map(|phone| phone.to_string())
        .ok_or(CommandError::NotEnoughArgs {
            expected: 1,
            got: 0,
        })
}

/// `all`
pub fn show_all(book: &AddressBook) -> CommandResult {
    if book.is_empty() {
        return Ok("No contacts saved.".to_string());
    }
    Ok(book.to_string())
}

/// `delete <name>`
pub fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    let Some(name) = args.first() else {
        return Ok("Give me a name to delete.".to_string());
    };
    Ok(book.delete_record(name))
}

/// `find_phone <name> <phone>`: look a number up within one contact.
pub fn find_phone(args: &[String], book: &AddressBook) -> CommandResult {
    let [name, phone_number] = args else {
        return Ok(format!(
            "{} Please provide a name and a phone number.",
            INVALID_COMMAND
        ));
    };

    let Some(record) = book.find_record(name) else {
        return Ok(format!("No record found for {}.", name));
    };

    Ok(match record.find_phone(phone_number) {
        Some(found) => format!("{}: {}", record.name(), found),
        None => "Phone number not found.".to_string(),
    })
}
