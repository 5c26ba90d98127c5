//! Path resolution for the supervised server executable.
//!
//! The supervisor locates the server by a fixed filename convention: the
//! executable is expected to live in the supervisor's current working
//! directory under a well-known name (configurable via [`crate::Settings`]).
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user messages separately

mod error;

pub use error::PathError;

use std::env;
use std::path::{Path, PathBuf};

/// Resolve the expected on-disk path of the server executable.
///
/// Joins the current working directory with `file_name`. The result is a
/// convention, not a guarantee: the file may not exist and no process may
/// be running from it.
pub fn server_executable_path(file_name: &str) -> Result<PathBuf, PathError> {
    if file_name.is_empty() {
        return Err(PathError::EmptyPath);
    }
    let cwd = env::current_dir().map_err(|e| PathError::CurrentDirError(e.to_string()))?;
    Ok(cwd.join(file_name))
}

/// Split an executable path into its containing directory and filename.
///
/// The directory becomes the working directory of a relaunched server; the
/// filename is what the launcher script starts. A path with no filename
/// component (e.g. `/srv/game/`) is rejected.
pub fn split_executable(path: &Path) -> Result<(PathBuf, String), PathError> {
    if path.as_os_str().is_empty() {
        return Err(PathError::EmptyPath);
    }
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(ToOwned::to_owned)
        .ok_or_else(|| PathError::NoFileName(path.to_path_buf()))?;
    let dir = path.parent().map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    let dir = if dir.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        dir
    };
    Ok((dir, file_name))
}
