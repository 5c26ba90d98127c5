//! CLI-specific error types and mappings.
//!
//! Maps runtime and path errors to exit codes and user-facing messages.

use respawn_core::paths::PathError;
use respawn_runtime::SupervisorError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument parsing error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Process lookup/termination/spawn error.
    #[error("Process error: {0}")]
    Process(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Specific categories per sysexits.h
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Process(_) => 71,  // EX_OSERR
        }
    }
}

impl From<SupervisorError> for CliError {
    fn from(err: SupervisorError) -> Self {
        match err {
            SupervisorError::ScriptWrite { .. } => Self::Io(err.to_string()),
            SupervisorError::Path(_) => Self::Config(err.to_string()),
            SupervisorError::Enumeration(_)
            | SupervisorError::NotFound { .. }
            | SupervisorError::Termination { .. }
            | SupervisorError::Spawn { .. } => Self::Process(err.to_string()),
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn exit_codes_follow_sysexits() {
        assert_eq!(CliError::Arguments("x".into()).exit_code(), 2);
        assert_eq!(CliError::Io("x".into()).exit_code(), 74);
        assert_eq!(CliError::Config("x".into()).exit_code(), 78);
        assert_eq!(CliError::Process("x".into()).exit_code(), 71);
    }

    #[test]
    fn not_found_maps_to_process_error() {
        let err: CliError = SupervisorError::NotFound {
            path: PathBuf::from("/srv/game/Server"),
        }
        .into();
        assert!(matches!(err, CliError::Process(_)));
    }

    #[test]
    fn script_write_maps_to_io_error() {
        let err: CliError = SupervisorError::ScriptWrite {
            path: PathBuf::from("restart.sh"),
            source: std::io::Error::other("disk full"),
        }
        .into();
        assert!(matches!(err, CliError::Io(_)));
    }
}
