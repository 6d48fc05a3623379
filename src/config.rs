//! Configuration management for the assistant bot.
//!
//! This module handles loading and validating configuration from environment variables.
//! Nothing is required; every setting has a default.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use tracing_subscriber::EnvFilter;

/// Default interactive prompt.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt written before each line is read
    pub prompt: String,

    /// Log level used when RUST_LOG is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_PROMPT`: Interactive prompt (default: "Enter a command: ")
    /// - `LOG_LEVEL`: Logging level or filter directive (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or(defaults.prompt);
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        if let Err(e) = EnvFilter::try_new(&log_level) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Not a valid log filter ({}), got: {}", e, log_level),
            });
        }

        Ok(Config { prompt, log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: "error".to_string(),
        }
    }
}
