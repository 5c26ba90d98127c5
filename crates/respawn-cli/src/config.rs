//! CLI configuration loading.
//!
//! Settings come from a JSON file (default `respawn.json` in the current
//! directory), with the executable name overridable through the
//! `RESPAWN_SERVER_EXECUTABLE` environment variable. A missing file is not
//! an error: defaults apply.

use crate::error::CliError;
use respawn_core::{LaunchSpec, Settings, server_executable_path};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default settings filename, looked up in the current working directory.
pub const DEFAULT_CONFIG_FILE: &str = "respawn.json";

/// Environment override for the server executable filename.
pub const SERVER_EXECUTABLE_ENV: &str = "RESPAWN_SERVER_EXECUTABLE";

/// Resolved CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub settings: Settings,
}

impl CliConfig {
    /// Load from the default settings file, falling back to defaults when
    /// the file does not exist.
    pub fn with_defaults() -> Result<Self, CliError> {
        Self::load_or_defaults(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load settings from `path` when it exists, defaults otherwise.
    ///
    /// Only for the implicit default lookup; a file the user named
    /// explicitly goes through [`Self::load`] so a typo'd path cannot be
    /// papered over with a different executable convention.
    fn load_or_defaults(path: &Path) -> Result<Self, CliError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Self::from_settings(Settings::with_defaults()))
        }
    }

    /// Load settings from `path`.
    ///
    /// A missing, unreadable or malformed file is a configuration error.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "settings file {} does not exist",
                path.display()
            )));
        }
        let raw = fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("cannot read {}: {e}", path.display())))?;
        let settings = serde_json::from_str(&raw)
            .map_err(|e| CliError::Config(format!("invalid settings in {}: {e}", path.display())))?;
        Ok(Self::from_settings(settings))
    }

    /// Apply environment overrides on top of `settings`.
    fn from_settings(mut settings: Settings) -> Self {
        if let Ok(name) = env::var(SERVER_EXECUTABLE_ENV) {
            settings.server_executable = Some(name);
        }
        Self { settings }
    }

    /// Expected on-disk path of the server executable, per the fixed
    /// filename convention.
    pub fn server_path(&self) -> Result<PathBuf, CliError> {
        Ok(server_executable_path(
            self.settings.effective_server_executable(),
        )?)
    }

    /// Build the launch spec for a generic `run`, with `extra_args`
    /// appended after the configured launch arguments.
    #[must_use]
    pub fn launch_spec(&self, extra_args: Vec<String>) -> LaunchSpec {
        let working_dir = self
            .settings
            .server_directory
            .as_deref()
            .map_or_else(|| PathBuf::from("."), PathBuf::from);

        let mut args = self.settings.effective_launch_args().to_vec();
        args.extend(extra_args);

        LaunchSpec::new(self.settings.effective_server_executable(), working_dir).with_args(args)
    }
}
