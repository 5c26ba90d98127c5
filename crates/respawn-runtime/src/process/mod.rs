//! Process discovery and forced termination.
//!
//! Provides the two halves of the kill flow:
//! - [`find_by_path`]: resolve a PID from an on-disk executable path
//! - [`Terminator`]: force-kill a process by PID, per-platform backends

mod locate;
mod table;
mod terminate;
mod types;

pub use locate::find_by_path;
pub use table::{ProcessTable, SystemTable};
pub use terminate::{KillOutcome, Terminator, native_terminator, pid_exists};
pub use types::ProcessHandle;

use crate::error::SupervisorResult;
use std::path::Path;
use tracing::info;

/// Locate the process running from `target` and force-kill it.
///
/// Linear flow with no branching: resolve the PID, then terminate it. Any
/// step's failure aborts and propagates; in particular, when no process
/// matches no termination call is issued.
pub fn kill_by_path(
    table: &dyn ProcessTable,
    terminator: &dyn Terminator,
    target: &Path,
) -> SupervisorResult<KillOutcome> {
    let handle = find_by_path(table, target)?;
    info!(pid = handle.pid, path = %target.display(), "killing server process");
    terminator.kill(handle.pid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SupervisorError;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct FakeTable(Vec<ProcessHandle>);

    impl ProcessTable for FakeTable {
        fn snapshot(&self) -> SupervisorResult<Vec<ProcessHandle>> {
            Ok(self.0.clone())
        }
    }

    /// Records every PID it is asked to kill.
    struct RecordingTerminator {
        calls: AtomicU32,
    }

    impl Terminator for RecordingTerminator {
        fn kill(&self, _pid: u32) -> SupervisorResult<KillOutcome> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(KillOutcome::Killed)
        }
    }

    #[test]
    fn kill_by_path_kills_the_matching_pid() {
        let table = FakeTable(vec![ProcessHandle::new(
            42,
            PathBuf::from("/srv/game/Server"),
        )]);
        let terminator = RecordingTerminator {
            calls: AtomicU32::new(0),
        };

        let outcome = kill_by_path(&table, &terminator, Path::new("/srv/game/Server")).unwrap();
        assert!(matches!(outcome, KillOutcome::Killed));
        assert_eq!(terminator.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn kill_by_path_no_match_issues_no_termination() {
        let table = FakeTable(vec![]);
        let terminator = RecordingTerminator {
            calls: AtomicU32::new(0),
        };

        let err = kill_by_path(&table, &terminator, Path::new("/srv/game/Server")).unwrap_err();
        assert!(matches!(err, SupervisorError::NotFound { .. }));
        assert_eq!(terminator.calls.load(Ordering::SeqCst), 0);
    }
}
