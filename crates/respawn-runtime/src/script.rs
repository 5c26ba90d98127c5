//! Launcher script generation.
//!
//! A launcher script is a tiny batch (Windows) or POSIX sh (elsewhere)
//! script whose only job is to start a target executable detached from its
//! creator: change into the working directory, start the server, exit. The
//! server keeps running after both the script and the supervisor are gone.
//!
//! Scripts are written under fixed, well-known names in the current working
//! directory, overwritten on every restart and never deleted. The overwrite
//! is not atomic: a crash mid-write can leave a truncated script. Accepted
//! limitation for a single-instance supervisor.

use crate::error::{SupervisorError, SupervisorResult};
use respawn_core::LaunchSpec;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Well-known name of the restart launcher script.
#[cfg(windows)]
pub const RESTART_SCRIPT_NAME: &str = "restart.bat";
/// Well-known name of the restart launcher script.
#[cfg(not(windows))]
pub const RESTART_SCRIPT_NAME: &str = "restart.sh";

/// Well-known name of the generic run script.
#[cfg(windows)]
pub const RUN_SCRIPT_NAME: &str = "run_command.bat";
/// Well-known name of the generic run script.
#[cfg(not(windows))]
pub const RUN_SCRIPT_NAME: &str = "run_command.sh";

/// A launcher script materialized on disk.
#[derive(Debug, Clone)]
pub struct GeneratedScript {
    /// Where the script was written.
    pub path: PathBuf,
    /// The rendered script text.
    pub contents: String,
}

/// Quote a single token for the target shell.
///
/// Every path, flag and argument is quoted individually so embedded spaces
/// survive; a plain space-join of unquoted tokens would silently split them.
#[cfg(windows)]
fn quote(token: &str) -> String {
    // cmd convention: double quotes inside a quoted string are doubled
    format!("\"{}\"", token.replace('"', "\"\""))
}

#[cfg(not(windows))]
fn quote(token: &str) -> String {
    // POSIX sh: single quotes, with embedded quotes spliced as '\''
    format!("'{}'", token.replace('\'', "'\\''"))
}

/// The token used to invoke the executable from inside the script.
///
/// On Unix a bare filename needs a `./` prefix because the script has
/// already changed into the working directory.
#[cfg(not(windows))]
fn exec_token(executable: &Path) -> String {
    let raw = executable.display().to_string();
    if executable.components().count() == 1 {
        format!("./{raw}")
    } else {
        raw
    }
}

#[cfg(windows)]
fn exec_token(executable: &Path) -> String {
    executable.display().to_string()
}

/// Render the launcher script text for `spec`.
#[cfg(windows)]
pub fn render(spec: &LaunchSpec) -> String {
    // `start ""` detaches; the first quoted token is the window title
    let mut command = format!("start \"\" {}", quote(&exec_token(&spec.executable)));
    for token in spec.trailing_tokens() {
        command.push(' ');
        command.push_str(&quote(token));
    }
    format!(
        "@echo off\r\npushd {}\r\n{}\r\npopd\r\n",
        quote(&spec.working_dir.display().to_string()),
        command,
    )
}

/// Render the launcher script text for `spec`.
#[cfg(not(windows))]
pub fn render(spec: &LaunchSpec) -> String {
    // nohup + & detaches; the server outlives the script and its parent
    let mut command = format!("nohup {}", quote(&exec_token(&spec.executable)));
    for token in spec.trailing_tokens() {
        command.push(' ');
        command.push_str(&quote(token));
    }
    format!(
        "#!/bin/sh\ncd {} || exit 1\n{} >/dev/null 2>&1 &\n",
        quote(&spec.working_dir.display().to_string()),
        command,
    )
}

/// Write the launcher script for `spec` to `path`, overwriting any
/// previous script.
///
/// The working directory named by the spec must exist: a script pointing at
/// a missing directory would fail only after the supervisor has already
/// exited, so that mistake is surfaced here instead.
///
/// # Errors
///
/// [`SupervisorError::ScriptWrite`] on any filesystem failure (missing
/// working directory, permissions, disk full).
pub fn write_script(path: &Path, spec: &LaunchSpec) -> SupervisorResult<GeneratedScript> {
    if !spec.working_dir.is_dir() {
        return Err(SupervisorError::ScriptWrite {
            path: path.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::NotFound,
                format!("working directory {} does not exist", spec.working_dir.display()),
            ),
        });
    }

    let contents = render(spec);
    fs::write(path, &contents).map_err(|source| SupervisorError::ScriptWrite {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|source| {
            SupervisorError::ScriptWrite {
                path: path.to_path_buf(),
                source,
            }
        })?;
    }

    debug!(path = %path.display(), "wrote launcher script");
    Ok(GeneratedScript {
        path: path.to_path_buf(),
        contents,
    })
}
