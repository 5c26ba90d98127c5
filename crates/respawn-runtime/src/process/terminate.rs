//! Forced process termination by PID.
//!
//! One [`Terminator`] interface, per-platform backends:
//! - Unix: SIGKILL via the nix crate (no SIGTERM grace period — the
//!   supervisor's kill is an unconditional stop, not a shutdown request)
//! - Windows: `taskkill /PID <n> /F`
//!
//! The backend is selected at build time through [`native_terminator`], so
//! callers never touch platform conditionals.

use crate::error::{SupervisorError, SupervisorResult};

#[cfg(unix)]
use nix::errno::Errno;
#[cfg(unix)]
use nix::sys::signal::{self, Signal};
#[cfg(unix)]
use nix::unistd::Pid;

/// Result of a kill request.
///
/// A PID that is already gone is reported distinctly so callers treating
/// kill as idempotent cleanup do not surface a false failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillOutcome {
    /// The termination signal was delivered.
    Killed,
    /// The process had already exited before the kill was issued.
    AlreadyExited,
}

/// Forcefully end a process by identifier.
pub trait Terminator {
    /// Issue an unconditional, non-graceful termination for `pid`.
    ///
    /// Irreversible. Returns [`KillOutcome::AlreadyExited`] when the PID no
    /// longer exists; a hard [`SupervisorError::Termination`] only when the
    /// OS rejected the request (permissions, OS error).
    fn kill(&self, pid: u32) -> SupervisorResult<KillOutcome>;
}

/// SIGKILL-based backend for Unix targets.
#[cfg(unix)]
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalTerminator;

#[cfg(unix)]
impl Terminator for SignalTerminator {
    fn kill(&self, pid: u32) -> SupervisorResult<KillOutcome> {
        match signal::kill(Pid::from_raw(pid as i32), Signal::SIGKILL) {
            Ok(()) => Ok(KillOutcome::Killed),
            Err(Errno::ESRCH) => Ok(KillOutcome::AlreadyExited),
            Err(errno) => Err(SupervisorError::Termination {
                pid,
                reason: errno.to_string(),
            }),
        }
    }
}

/// `taskkill`-based backend for Windows targets.
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskkillTerminator;

#[cfg(windows)]
impl Terminator for TaskkillTerminator {
    fn kill(&self, pid: u32) -> SupervisorResult<KillOutcome> {
        let output = std::process::Command::new("taskkill")
            .args(["/PID", &pid.to_string(), "/F"])
            .output()
            .map_err(|e| SupervisorError::Termination {
                pid,
                reason: e.to_string(),
            })?;

        if output.status.success() {
            return Ok(KillOutcome::Killed);
        }
        // taskkill exits with 128 when the PID does not exist
        if output.status.code() == Some(128) {
            return Ok(KillOutcome::AlreadyExited);
        }
        Err(SupervisorError::Termination {
            pid,
            reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

/// The termination backend for the current platform.
#[must_use]
pub fn native_terminator() -> impl Terminator {
    #[cfg(unix)]
    {
        SignalTerminator
    }

    #[cfg(windows)]
    {
        TaskkillTerminator
    }
}

/// Check if a PID exists (without verifying what it runs).
///
/// On Unix this uses `kill` with the null signal, which checks existence
/// without delivering anything; elsewhere it consults the process table.
#[cfg(unix)]
pub fn pid_exists(pid: u32) -> bool {
    match signal::kill(Pid::from_raw(pid as i32), None) {
        Ok(()) => true,
        Err(Errno::ESRCH) => false, // No such process
        Err(_) => true,             // Process exists but we lack permission
    }
}

/// Check if a PID exists (without verifying what it runs).
///
/// On Unix this uses `kill` with the null signal, which checks existence
/// without delivering anything; elsewhere it consults the process table.
#[cfg(not(unix))]
pub fn pid_exists(pid: u32) -> bool {
    use sysinfo::System;

    System::new_all()
        .process(sysinfo::Pid::from_u32(pid))
        .is_some()
}
