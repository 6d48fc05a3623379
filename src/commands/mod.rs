//! Command layer: input parsing, handlers and the dispatcher.
//!
//! A raw line is split into a [`ParsedInput`], its command name resolved to
//! a [`Command`], and the [`Dispatcher`] runs the matching handler against
//! the address book, turning any failure into a fixed reply.

pub mod dispatcher;
pub mod handlers;

pub use dispatcher::{translate, Dispatcher, Reply};

/// A line split into its command name and positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Lowercased command name
    pub command: String,

    /// Remaining whitespace-separated tokens, verbatim
    pub args: Vec<String>,
}

/// Split a raw input line on whitespace.
///
/// The first token becomes the lowercased command name; the rest are kept
/// as-is. There is no quoting support. Returns `None` for a blank line.
///
/// # Example
///
/// ```
/// use assistant_bot::commands::parse_input;
///
/// let parsed = parse_input("  ADD Alice 1234567890 ").unwrap();
/// assert_eq!(parsed.command, "add");
/// assert_eq!(parsed.args, vec!["Alice", "1234567890"]);
/// ```
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.trim().to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some(ParsedInput { command, args })
}

/// Every command the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Delete,
    FindPhone,
    Exit,
    Unknown,
}

impl Command {
    /// Resolve a (lowercased) command name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "delete" => Self::Delete,
            "find_phone" => Self::FindPhone,
            "close" | "exit" => Self::Exit,
            _ => Self::Unknown,
        }
    }

    /// Canonical name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::Delete => "delete",
            Self::FindPhone => "find_phone",
            Self::Exit => "exit",
            Self::Unknown => "unknown",
        }
    }
}
