//! Restart orchestration.
//!
//! A restart is a linear sequence with no branching states:
//!
//! 1. **Prepare** — split the executable path into directory and filename
//!    and build a [`LaunchSpec`] with the fast-start flag
//! 2. **Emit** — write the launcher script; an IO error aborts here
//! 3. **Spawn** — start the script detached; a spawn error aborts here
//! 4. **Shutdown** — return [`RestartOutcome::Shutdown`] to the caller
//!
//! The core never exits the process itself: self-termination is modeled as
//! a terminal outcome so the top-level caller decides when to actually
//! `exit(0)`. If the replacement could not even be launched (steps 2-3),
//! the error propagates and the current process keeps running.

use crate::error::{SupervisorError, SupervisorResult};
use crate::script::{self, GeneratedScript};
use respawn_core::{FAST_START_FLAG, LaunchSpec, split_executable};
use std::env;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, info};

/// Terminal outcome of a successful restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartOutcome {
    /// The replacement launcher was spawned; the current process should now
    /// end itself with a success status. The new instance starts
    /// independently of the old process's lifetime.
    Shutdown,
}

/// Restart the server at `executable_path` via a generated launcher script.
///
/// The script is written under [`script::RESTART_SCRIPT_NAME`] in the
/// current working directory and spawned detached (fire-and-forget: its
/// output is not captured and it is never waited on). On success the caller
/// is expected to terminate the current process with a success status.
///
/// # Errors
///
/// - [`SupervisorError::ScriptWrite`] if the script cannot be written
/// - [`SupervisorError::Spawn`] if the script interpreter cannot be started
///
/// In both cases the current process must keep running.
pub fn restart(executable_path: &Path) -> SupervisorResult<RestartOutcome> {
    restart_in(Path::new("."), executable_path)
}

pub(crate) fn restart_in(
    script_dir: &Path,
    executable_path: &Path,
) -> SupervisorResult<RestartOutcome> {
    let generated = emit_restart_script(
        &script_dir.join(script::RESTART_SCRIPT_NAME),
        executable_path,
    )?;
    spawn_detached(&generated.path)?;
    info!(
        executable = %executable_path.display(),
        script = %generated.path.display(),
        "replacement launcher spawned, supervisor may exit"
    );
    Ok(RestartOutcome::Shutdown)
}

/// Prepare + Emit: build the relaunch spec and materialize its script.
fn emit_restart_script(
    script_path: &Path,
    executable_path: &Path,
) -> SupervisorResult<GeneratedScript> {
    let (working_dir, file_name) = split_executable(executable_path)?;
    let spec = LaunchSpec::new(file_name, working_dir)
        .with_extra_flags(vec![FAST_START_FLAG.to_string()]);
    script::write_script(script_path, &spec)
}

/// Spawn a generated script detached from the current process tree.
fn spawn_detached(script_path: &Path) -> SupervisorResult<()> {
    let mut command = interpreter_command(script_path);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    // Fire and forget: the child is never waited on
    command.spawn().map_err(|source| SupervisorError::Spawn {
        path: script_path.to_path_buf(),
        source,
    })?;
    debug!(script = %script_path.display(), "spawned detached launcher");
    Ok(())
}

#[cfg(windows)]
fn interpreter_command(script_path: &Path) -> Command {
    let mut command = Command::new("cmd.exe");
    command.arg("/C").arg(script_path);
    command
}

#[cfg(not(windows))]
fn interpreter_command(script_path: &Path) -> Command {
    use std::os::unix::process::CommandExt;

    let mut command = Command::new("sh");
    command.arg(script_path);
    // Own process group, so the launcher survives the supervisor's exit
    command.process_group(0);
    command
}

/// Launch an arbitrary executable through a generated run script, waiting
/// for the script (not the server) to finish.
///
/// The script is written under [`script::RUN_SCRIPT_NAME`] next to the
/// supervisor and executed with the spec's working directory; the server it
/// starts is detached by the script itself.
///
/// # Errors
///
/// - [`SupervisorError::ScriptWrite`] if the script cannot be written
/// - [`SupervisorError::Spawn`] if the script cannot be executed
pub fn launch_via_script(spec: &LaunchSpec) -> SupervisorResult<ExitStatus> {
    let cwd = env::current_dir().map_err(|source| SupervisorError::Spawn {
        path: Path::new(script::RUN_SCRIPT_NAME).to_path_buf(),
        source,
    })?;
    let generated = script::write_script(&cwd.join(script::RUN_SCRIPT_NAME), spec)?;

    let mut command = interpreter_command(&generated.path);
    command
        .current_dir(&spec.working_dir)
        .status()
        .map_err(|source| SupervisorError::Spawn {
            path: generated.path.clone(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn emit_builds_script_from_executable_directory() {
        let dir = TempDir::new().unwrap();
        let game_dir = dir.path().join("srv").join("game");
        fs::create_dir_all(&game_dir).unwrap();
        let exe = game_dir.join("Server.exe");

        let script_path = dir.path().join(script::RESTART_SCRIPT_NAME);
        let generated = emit_restart_script(&script_path, &exe).unwrap();

        // Working directory is the executable's directory, start command
        // references the bare filename plus the fast-start flag
        assert!(generated.contents.contains(&game_dir.display().to_string()));
        assert!(generated.contents.contains("Server.exe"));
        assert!(generated.contents.contains(FAST_START_FLAG));
    }

    #[test]
    #[cfg(unix)]
    fn restart_spawns_launcher_and_reports_shutdown() {
        let dir = TempDir::new().unwrap();
        let game_dir = dir.path().join("game");
        fs::create_dir_all(&game_dir).unwrap();

        let outcome = restart_in(dir.path(), &game_dir.join("Server")).unwrap();
        assert_eq!(outcome, RestartOutcome::Shutdown);
        assert!(dir.path().join(script::RESTART_SCRIPT_NAME).exists());
    }

    #[test]
    fn restart_aborts_when_working_directory_is_missing() {
        let dir = TempDir::new().unwrap();
        let exe = dir.path().join("missing").join("Server");

        let err = restart_in(dir.path(), &exe).unwrap_err();
        assert!(matches!(err, SupervisorError::ScriptWrite { .. }));
        // No script, so nothing was spawned either
        assert!(!dir.path().join(script::RESTART_SCRIPT_NAME).exists());
    }

    #[test]
    fn restart_rejects_path_without_filename() {
        let err = restart_in(Path::new("/tmp"), Path::new("")).unwrap_err();
        assert!(matches!(err, SupervisorError::Path(_)));
    }
}
