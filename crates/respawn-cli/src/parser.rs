//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Commands;

/// Command-line interface definition for the server supervisor.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "respawn")]
#[command(about = "Kill and restart a managed game server process")]
#[command(version)]
pub struct Cli {
    /// Path to the settings file for this invocation
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_args_parse() {
        let cli = Cli::parse_from(["respawn", "--verbose", "--config", "/tmp/respawn.json", "kill"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/respawn.json")));
        assert!(matches!(cli.command, Some(Commands::Kill)));
    }

    #[test]
    fn restart_accepts_executable_override() {
        let cli = Cli::parse_from(["respawn", "restart", "--executable", "/srv/game/Server.exe"]);
        match cli.command {
            Some(Commands::Restart { executable }) => {
                assert_eq!(executable, Some(PathBuf::from("/srv/game/Server.exe")));
            }
            other => panic!("expected restart command, got {:?}", other.is_some()),
        }
    }
}
