//! Command handlers.
//!
//! Each handler resolves what it needs from [`CliConfig`] and delegates to
//! `respawn-runtime`. Printing and process exit stay in `main`.

use crate::config::CliConfig;
use crate::error::CliError;
use respawn_runtime::{
    KillOutcome, ProcessHandle, RestartOutcome, SystemTable, find_by_path, kill_by_path,
    launch_via_script, native_terminator, restart,
};
use std::path::PathBuf;
use std::process::ExitStatus;
use tracing::debug;

/// Restart the server, returning the terminal outcome.
///
/// On `Shutdown` the caller must end the current process with a success
/// status; on error the process keeps running.
pub fn restart_server(
    config: &CliConfig,
    executable: Option<PathBuf>,
) -> Result<RestartOutcome, CliError> {
    let path = match executable {
        Some(path) => path,
        None => config.server_path()?,
    };
    debug!(path = %path.display(), "restarting server");
    Ok(restart(&path)?)
}

/// Locate the server by the conventional path and force-kill it.
pub fn kill_server(config: &CliConfig) -> Result<KillOutcome, CliError> {
    let target = config.server_path()?;
    Ok(kill_by_path(&SystemTable::new(), &native_terminator(), &target)?)
}

/// Resolve the running server's PID without touching it.
pub fn server_status(config: &CliConfig) -> Result<ProcessHandle, CliError> {
    let target = config.server_path()?;
    Ok(find_by_path(&SystemTable::new(), &target)?)
}

/// Launch the configured server through a generated run script.
pub fn run_server(config: &CliConfig, extra_args: Vec<String>) -> Result<ExitStatus, CliError> {
    let spec = config.launch_spec(extra_args);
    Ok(launch_via_script(&spec)?)
}
