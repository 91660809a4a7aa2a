//! Structured logging setup for the `petrocalc` binary.
//!
//! Logs go to stderr so stdout carries only calculation output.

use crate::config::LoggingConfig;
use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let directives = if verbose { "debug" } else { config.filter.as_str() };
    let filter = EnvFilter::try_new(directives)
        .map_err(|e| anyhow!("invalid log filter '{directives}': {e}"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let installed = if config.json { builder.json().try_init() } else { builder.try_init() };
    installed.map_err(|e| anyhow!("failed to install tracing subscriber: {e}"))
}
