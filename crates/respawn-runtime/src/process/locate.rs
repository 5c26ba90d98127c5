//! PID resolution by executable path.

use crate::error::{SupervisorError, SupervisorResult};
use crate::process::{ProcessHandle, ProcessTable};
use std::path::Path;
use tracing::debug;

/// Resolve the PID of the process running from `target`.
///
/// Paths are compared byte-for-byte (case-sensitive), no canonicalization.
/// The first match in enumeration order wins; if several processes share the
/// same executable path (unexpected for a single-instance server) the choice
/// is non-deterministic because the OS does not guarantee a stable order.
/// That is a documented limitation, not something this function papers over.
///
/// # Errors
///
/// - [`SupervisorError::Enumeration`] if the process listing itself failed
/// - [`SupervisorError::NotFound`] if no live process matches `target`
pub fn find_by_path(table: &dyn ProcessTable, target: &Path) -> SupervisorResult<ProcessHandle> {
    let snapshot = table.snapshot()?;
    debug!(
        candidates = snapshot.len(),
        target = %target.display(),
        "scanning process table"
    );

    snapshot
        .into_iter()
        .find(|handle| handle.executable == target)
        .ok_or_else(|| SupervisorError::NotFound {
            path: target.to_path_buf(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct FakeTable(Vec<ProcessHandle>);

    impl ProcessTable for FakeTable {
        fn snapshot(&self) -> SupervisorResult<Vec<ProcessHandle>> {
            Ok(self.0.clone())
        }
    }

    struct FailingTable;

    impl ProcessTable for FailingTable {
        fn snapshot(&self) -> SupervisorResult<Vec<ProcessHandle>> {
            Err(SupervisorError::Enumeration("listing denied".into()))
        }
    }

    #[test]
    fn finds_single_matching_process() {
        let target = PathBuf::from("/srv/game/Server");
        let table = FakeTable(vec![
            ProcessHandle::new(10, PathBuf::from("/usr/bin/other")),
            ProcessHandle::new(42, target.clone()),
        ]);

        let handle = find_by_path(&table, &target).unwrap();
        assert_eq!(handle.pid, 42);
    }

    #[test]
    fn zero_matches_is_not_found() {
        let table = FakeTable(vec![ProcessHandle::new(
            10,
            PathBuf::from("/usr/bin/other"),
        )]);

        let err = find_by_path(&table, Path::new("/srv/game/Server")).unwrap_err();
        match err {
            SupervisorError::NotFound { path } => {
                assert_eq!(path, PathBuf::from("/srv/game/Server"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let table = FakeTable(vec![ProcessHandle::new(
            7,
            PathBuf::from("/srv/game/server"),
        )]);

        assert!(find_by_path(&table, Path::new("/srv/game/Server")).is_err());
    }

    #[test]
    fn first_match_in_enumeration_order_wins() {
        let target = PathBuf::from("/srv/game/Server");
        let table = FakeTable(vec![
            ProcessHandle::new(1, target.clone()),
            ProcessHandle::new(2, target.clone()),
        ]);

        let handle = find_by_path(&table, &target).unwrap();
        assert_eq!(handle.pid, 1);
    }

    #[test]
    fn enumeration_failure_propagates() {
        let err = find_by_path(&FailingTable, Path::new("/srv/game/Server")).unwrap_err();
        assert!(matches!(err, SupervisorError::Enumeration(_)));
    }
}
