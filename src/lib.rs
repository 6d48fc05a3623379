//! Assistant Bot - an interactive command-line contact manager.
//!
//! Contacts live in memory for the lifetime of the process. Each line typed
//! at the prompt is parsed into a command, run against the address book and
//! answered with a human-readable reply.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `Phone`) and the `Field` trait
//! - **models**: `Record` (one contact) and `AddressBook` (all contacts by name)
//! - **error**: Command and configuration error types
//! - **config**: Configuration management from environment variables
//! - **commands**: Input parsing, command handlers and the dispatcher
//! - **metrics**: Per-session command counters
//! - **session**: The async read-dispatch-print loop

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod session;

// Re-export commonly used types
pub use commands::{parse_input, Command, Dispatcher, Reply};
pub use config::Config;
pub use domain::{Field, Name, Phone, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError};
pub use metrics::{MetricsSummary, SessionMetrics};
pub use models::{AddressBook, PhoneEdit, Record};
pub use session::run_session;
