//! CLI adapter for the respawn supervisor.
//!
//! Argument parsing, settings-file loading and exit-code mapping live here;
//! all process work is delegated to `respawn-runtime`.

pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod parser;

pub use commands::Commands;
pub use config::{CliConfig, DEFAULT_CONFIG_FILE};
pub use error::CliError;
pub use parser::Cli;
