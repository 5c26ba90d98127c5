//! Subcommand definitions.

use clap::Subcommand;
use std::path::PathBuf;

/// Supervisor subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Restart the server via a generated launcher script, then exit
    Restart {
        /// Path to the server executable (defaults to the configured
        /// filename in the current directory)
        #[arg(long)]
        executable: Option<PathBuf>,
    },

    /// Force-kill the running server process
    Kill,

    /// Show the PID of the running server process
    Status,

    /// Launch the server through a generated run script
    Run {
        /// Extra arguments appended after the configured launch arguments
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}
