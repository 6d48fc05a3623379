//! Command dispatcher.
//!
//! Routes a parsed command to its handler, then translates any
//! [`CommandError`] into its fixed user-facing reply. Nothing a user types
//! can make `dispatch` fail.

use super::handlers;
use super::{parse_input, Command};
use crate::error::CommandResult;
use crate::metrics::{CommandTimer, SessionMetrics};
use crate::models::AddressBook;
use tracing::{debug, warn};

/// Farewell printed when the session ends.
pub const FAREWELL: &str = "Good bye!";

/// What the session should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading
    Text(String),

    /// Print the text and stop
    Exit(String),
}

/// Map a handler result to the text shown to the user.
pub fn translate(result: CommandResult) -> String {
    result.unwrap_or_else(|err| err.user_message().to_string())
}

/// Owns the address book and runs one command at a time against it.
#[derive(Debug)]
pub struct Dispatcher {
    book: AddressBook,
    metrics: SessionMetrics,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Create a dispatcher over an empty address book.
    pub fn new() -> Self {
        Self {
            book: AddressBook::new(),
            metrics: SessionMetrics::new(),
        }
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.book
    }

    pub fn metrics(&self) -> &SessionMetrics {
        &self.metrics
    }

    /// Parse and dispatch a raw input line. Blank lines yield `None`.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        let parsed = parse_input(line)?;
        let command = Command::from_name(&parsed.command);
        if command == Command::Unknown {
            debug!(input = %parsed.command, "Unrecognized command");
        }
        Some(self.dispatch(command, &parsed.args))
    }

    /// Run one command to completion.
    pub fn dispatch(&mut self, command: Command, args: &[String]) -> Reply {
        let timer = CommandTimer::new(self.metrics.clone());

        let result = match command {
            Command::Exit => Ok(FAREWELL.to_string()),
            Command::Hello => handlers::greet(),
            Command::Add => handlers::add_contact(args, &mut self.book),
            Command::Change => handlers::change_contact(args, &mut self.book),
            Command::Phone => handlers::show_phone(args, &self.book),
            Command::All => handlers::show_all(&self.book),
            Command::Delete => handlers::delete_contact(args, &mut self.book),
            Command::FindPhone => handlers::find_phone(args, &self.book),
            Command::Unknown => {
                self.metrics.record_unknown_command();
                Ok(handlers::INVALID_COMMAND.to_string())
            }
        };

        if let Err(ref err) = result {
            warn!(command = command.name(), kind = err.kind(), "{}", err);
            self.metrics.record_failure(err);
        }

        let duration = timer.complete();
        debug!(
            command = command.name(),
            args = args.len(),
            duration_us = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX),
            "Command handled"
        );

        let text = translate(result);
        if command == Command::Exit {
            Reply::Exit(text)
        } else {
            Reply::Text(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;

    fn reply(dispatcher: &mut Dispatcher, line: &str) -> String {
        match dispatcher.handle_line(line) {
            Some(Reply::Text(text)) | Some(Reply::Exit(text)) => text,
            None => panic!("no reply for {:?}", line),
        }
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate(Ok("done".into())), "done");
        assert_eq!(
            translate(Err(CommandError::InvalidFormat("x".into()))),
            "Give me name and phone please."
        );
        assert_eq!(
            translate(Err(CommandError::NotFound("x".into()))),
            "Name not found."
        );
        assert_eq!(
            translate(Err(CommandError::NotEnoughArgs {
                expected: 1,
                got: 0
            })),
            "Not enough arguments."
        );
    }

    #[test]
    fn test_blank_line_has_no_reply() {
        let mut dispatcher = Dispatcher::default();
        assert_eq!(dispatcher.handle_line("   "), None);
        assert_eq!(dispatcher.metrics().commands_total(), 0);
    }

    #[test]
    fn test_exit_commands() {
        let mut dispatcher = Dispatcher::default();
        assert_eq!(
            dispatcher.handle_line("close"),
            Some(Reply::Exit("Good bye!".to_string()))
        );
        assert_eq!(
            dispatcher.handle_line("EXIT now"),
            Some(Reply::Exit("Good bye!".to_string()))
        );
    }

    #[test]
    fn test_unknown_command() {
        let mut dispatcher = Dispatcher::default();
        assert_eq!(reply(&mut dispatcher, "fly away"), "Invalid command.");
        assert_eq!(dispatcher.metrics().unknown_commands_total(), 1);
    }

    #[test]
    fn test_search_is_not_a_command() {
        let mut dispatcher = Dispatcher::default();
        reply(&mut dispatcher, "add alice 1234567890");
        assert_eq!(reply(&mut dispatcher, "search alice"), "Invalid command.");
        assert_eq!(dispatcher.metrics().unknown_commands_total(), 1);
    }

    #[test]
    fn test_failures_are_counted() {
        let mut dispatcher = Dispatcher::default();
        assert_eq!(
            reply(&mut dispatcher, "add alice 12"),
            "Give me name and phone please."
        );
        assert_eq!(reply(&mut dispatcher, "phone"), "Not enough arguments.");

        let summary = dispatcher.metrics().summary();
        assert_eq!(summary.commands_total, 2);
        assert_eq!(summary.invalid_format_total, 1);
        assert_eq!(summary.not_enough_args_total, 1);
    }
}
