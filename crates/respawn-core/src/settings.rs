//! Settings domain types.
//!
//! Pure domain types with no infrastructure dependencies. All fields are
//! optional to support partial configuration files and graceful defaults.

use serde::{Deserialize, Serialize};

/// Conventional filename of the supervised server executable.
#[cfg(windows)]
pub const DEFAULT_SERVER_EXECUTABLE: &str = "Server.exe";

/// Conventional filename of the supervised server executable.
#[cfg(not(windows))]
pub const DEFAULT_SERVER_EXECUTABLE: &str = "Server";

/// Application settings structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Filename of the server executable in the working directory.
    pub server_executable: Option<String>,

    /// Directory the server runs from. Defaults to the current directory.
    pub server_directory: Option<String>,

    /// Arguments passed to the server on a generic launch.
    pub launch_args: Option<Vec<String>>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            server_executable: Some(DEFAULT_SERVER_EXECUTABLE.to_string()),
            server_directory: None,
            launch_args: Some(Vec::new()),
        }
    }

    /// Get the effective server executable filename (with default fallback).
    #[must_use]
    pub fn effective_server_executable(&self) -> &str {
        self.server_executable
            .as_deref()
            .unwrap_or(DEFAULT_SERVER_EXECUTABLE)
    }

    /// Get the effective launch arguments (empty when unset).
    #[must_use]
    pub fn effective_launch_args(&self) -> &[String] {
        self.launch_args.as_deref().unwrap_or(&[])
    }
}
