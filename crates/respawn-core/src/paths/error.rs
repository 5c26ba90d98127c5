//! Path-related error types.
//!
//! Provides semantic errors for path operations without exposing
//! adapter-specific concerns.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),

    /// An empty path or filename was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// A path was expected to name a file but has no filename component.
    #[error("{0} does not name an executable file")]
    NoFileName(PathBuf),
}
