//! Driver for the petrocalc formula library: command-line parsing,
//! configuration, logging setup and result rendering.

pub mod cli;
pub mod config;
pub mod demo;
pub mod logging;
pub mod output;

pub use cli::{Cli, Command, Outcome};
pub use config::{ConfigSource, OutputFormat, PetrocalcConfig};
pub use output::OutputSettings;
