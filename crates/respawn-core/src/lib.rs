//! Core domain types for the respawn supervisor.
//!
//! This crate holds the pure domain layer: launch specifications, settings
//! and path resolution. It has no process- or OS-level dependencies; those
//! live in `respawn-runtime`.

pub mod launch;
pub mod paths;
pub mod settings;

// Re-export commonly used types for convenience
pub use launch::{FAST_START_FLAG, LaunchSpec};
pub use paths::{PathError, server_executable_path, split_executable};
pub use settings::{DEFAULT_SERVER_EXECUTABLE, Settings};
