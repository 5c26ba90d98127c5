//! Shared types for process management.

use std::path::PathBuf;

/// A process resolved from the live process table.
///
/// Only valid at the instant of resolution: PIDs are recycled by the OS, so
/// callers must not persist a handle across a suspension point without
/// re-resolving it.
#[derive(Debug, Clone)]
pub struct ProcessHandle {
    /// Process ID.
    pub pid: u32,
    /// Executable path the process was started from.
    pub executable: PathBuf,
}

impl ProcessHandle {
    /// Create a new `ProcessHandle`.
    #[must_use]
    pub const fn new(pid: u32, executable: PathBuf) -> Self {
        Self { pid, executable }
    }
}
