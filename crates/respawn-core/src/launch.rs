//! Launch specification for starting the managed server.
//!
//! A [`LaunchSpec`] is an intent-based description of how to start the
//! server executable. It is constructed by the caller (CLI/config layer),
//! consumed once to render a launcher script, and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Flag passed to a restarted server so it skips first-run initialization.
pub const FAST_START_FLAG: &str = "-faststart";

/// Description of a server launch: what to start, with which arguments,
/// and where.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchSpec {
    /// Path to the executable to start. May be relative to `working_dir`.
    pub executable: PathBuf,
    /// Arguments appended after the extra flags, as literal tokens.
    pub args: Vec<String>,
    /// Directory the server is started from.
    pub working_dir: PathBuf,
    /// Supervisor-injected flags placed before the caller's arguments
    /// (e.g. the fast-start flag on restart).
    pub extra_flags: Vec<String>,
}

impl LaunchSpec {
    /// Create a spec with no arguments or extra flags.
    #[must_use]
    pub fn new(executable: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            args: Vec::new(),
            working_dir: working_dir.into(),
            extra_flags: Vec::new(),
        }
    }

    /// Set the argument list.
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Set the supervisor-injected extra flags.
    #[must_use]
    pub fn with_extra_flags(mut self, flags: Vec<String>) -> Self {
        self.extra_flags = flags;
        self
    }

    /// All tokens that follow the executable on the command line, in order:
    /// extra flags first, then caller arguments.
    pub fn trailing_tokens(&self) -> impl Iterator<Item = &str> {
        self.extra_flags
            .iter()
            .chain(self.args.iter())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let spec = LaunchSpec::new("Server.exe", "/srv/game")
            .with_args(vec!["-port".into(), "8080".into()])
            .with_extra_flags(vec![FAST_START_FLAG.into()]);

        assert_eq!(spec.executable, PathBuf::from("Server.exe"));
        assert_eq!(spec.working_dir, PathBuf::from("/srv/game"));
        assert_eq!(spec.args, vec!["-port", "8080"]);
        assert_eq!(spec.extra_flags, vec![FAST_START_FLAG]);
    }

    #[test]
    fn trailing_tokens_puts_extra_flags_first() {
        let spec = LaunchSpec::new("Server", ".")
            .with_args(vec!["-log".into()])
            .with_extra_flags(vec![FAST_START_FLAG.into()]);

        let tokens: Vec<&str> = spec.trailing_tokens().collect();
        assert_eq!(tokens, vec![FAST_START_FLAG, "-log"]);
    }
}
