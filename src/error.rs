//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Reply shown for any value-validation failure.
pub const INVALID_FORMAT_MESSAGE: &str = "Give me name and phone please.";

/// Reply shown when a lookup key is missing.
pub const NOT_FOUND_MESSAGE: &str = "Name not found.";

/// Reply shown when a command receives too few arguments.
pub const NOT_ENOUGH_ARGS_MESSAGE: &str = "Not enough arguments.";

/// Failures a command handler can report to the dispatcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// An argument failed value validation (bad phone, wrong shape)
    #[error("Invalid input: {0}")]
    InvalidFormat(String),

    /// A lookup key was not present
    #[error("Not found: {0}")]
    NotFound(String),

    /// Fewer positional arguments than the command needs
    #[error("Expected {expected} argument(s), got {got}")]
    NotEnoughArgs { expected: usize, got: usize },
}

impl CommandError {
    /// The fixed user-facing reply for this failure kind.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) => INVALID_FORMAT_MESSAGE,
            Self::NotFound(_) => NOT_FOUND_MESSAGE,
            Self::NotEnoughArgs { .. } => NOT_ENOUGH_ARGS_MESSAGE,
        }
    }

    /// Short label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidFormat(_) => "invalid_format",
            Self::NotFound(_) => "not_found",
            Self::NotEnoughArgs { .. } => "not_enough_args",
        }
    }
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidFormat(err.to_string())
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for command handler results
pub type CommandResult = Result<String, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
