//! Assistant Bot - Main entry point
//!
//! Runs the interactive contact manager on stdin/stdout. Logs go to stderr
//! so they never interleave with the dialogue.

use anyhow::Result;
use assistant_bot::{Config, Dispatcher};
use tokio::io::BufReader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can pick the default filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(log_level = %config.log_level, "Starting assistant bot");

    let mut dispatcher = Dispatcher::new();
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    assistant_bot::run_session(stdin, stdout, &mut dispatcher, &config.prompt).await?;

    info!("Assistant bot shutdown complete");
    Ok(())
}
