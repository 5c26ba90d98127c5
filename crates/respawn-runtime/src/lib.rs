//! OS-level runtime for the respawn supervisor.
//!
//! Locates the managed server process by executable path, force-kills it,
//! and restarts it through a generated launcher script so the supervisor
//! itself can exit without leaving a dangling parent.
//!
//! All operations here are synchronous and blocking; the supervisor invokes
//! each at most once per lifetime.

pub mod error;
pub mod process;
pub mod restart;
pub mod script;

pub use error::{SupervisorError, SupervisorResult};
pub use process::{
    KillOutcome, ProcessHandle, ProcessTable, SystemTable, Terminator, find_by_path, kill_by_path,
    native_terminator, pid_exists,
};
pub use restart::{RestartOutcome, launch_via_script, restart};
pub use script::{GeneratedScript, RESTART_SCRIPT_NAME, RUN_SCRIPT_NAME, write_script};
