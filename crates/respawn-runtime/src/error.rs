//! Error types for supervisor operations.
//!
//! One unified error type for locate/kill/restart, keeping error plumbing
//! out of the orchestration modules.

use respawn_core::paths::PathError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during supervisor operations.
///
/// None of these is retried automatically: restart and kill are
/// user-triggered, at-most-once operations where a silent retry could
/// duplicate running server instances. "PID already gone" is deliberately
/// not an error; see [`crate::process::KillOutcome::AlreadyExited`].
#[derive(Debug, Error)]
pub enum SupervisorError {
    /// The OS process listing could not be obtained.
    #[error("Failed to enumerate running processes: {0}")]
    Enumeration(String),

    /// No live process runs from the target executable path.
    #[error("No running process matches {path}")]
    NotFound { path: PathBuf },

    /// The OS rejected the termination request (permissions, OS error).
    #[error("Failed to terminate process {pid}: {reason}")]
    Termination { pid: u32, reason: String },

    /// Writing the launcher script failed.
    #[error("Failed to write launcher script {path}: {source}")]
    ScriptWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Launching the generated script failed.
    #[error("Failed to launch {path}: {source}")]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Path resolution failed.
    #[error(transparent)]
    Path(#[from] PathError),
}

/// Result type alias for supervisor operations.
pub type SupervisorResult<T> = Result<T, SupervisorError>;
