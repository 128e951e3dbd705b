//! Background git operations triggered by actions.
//!
//! Responsibilities:
//! - Run repository open, init and clone on blocking threads.
//! - Forward clone progress into the action channel.
//! - Send results back via the action channel for state updates.
//!
//! Does NOT handle:
//! - Direct application state modification (sends actions to do that).
//! - UI rendering or terminal management.
//!
//! Invariants:
//! - Every spawned task is tracked by the `TaskTracker` so shutdown can wait
//!   for it.
//! - Every trigger produces exactly one result action, unless the channel is
//!   closed because the app is exiting.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc::Sender;
pub use tokio_util::task::TaskTracker;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, info_span};

use crate::action::{Action, RepoIntent, progress_callback_to_action_sender};
use crate::git::{CloneOutcome, GitBackend, GitError, InitFlags, RepoSummary};

/// Shared git backend for blocking tasks.
pub type SharedBackend = Arc<dyn GitBackend>;

/// Handle side effects (git operations) for actions.
///
/// Actions without side effects are ignored.
pub async fn handle_side_effects(
    action: Action,
    backend: SharedBackend,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) {
    let action_name = action.name();
    let start = Instant::now();

    let span = info_span!(
        "tui.handle_action",
        action_type = action_name,
        duration_ms = tracing::field::Empty,
    );

    async move {
        handle_action(action, backend, tx, task_tracker);

        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}

fn handle_action(action: Action, backend: SharedBackend, tx: Sender<Action>, tracker: TaskTracker) {
    match action {
        Action::OpenRepository(path) => {
            spawn_repo_task(RepoIntent::Open, path, backend, tx, &tracker, |b, p| {
                b.open(p)
            });
        }
        Action::CreateRepository(path) => {
            spawn_repo_task(RepoIntent::Create, path, backend, tx, &tracker, |b, p| {
                b.init(p, InitFlags::NO_REINIT | InitFlags::MKDIR)
            });
        }
        Action::StartClone {
            url,
            target,
            cancel,
        } => spawn_clone(url, target, cancel, backend, tx, &tracker),
        _ => {}
    }
}

fn spawn_repo_task<F>(
    intent: RepoIntent,
    path: PathBuf,
    backend: SharedBackend,
    tx: Sender<Action>,
    tracker: &TaskTracker,
    op: F,
) where
    F: FnOnce(&dyn GitBackend, &std::path::Path) -> Result<RepoSummary, GitError> + Send + 'static,
{
    let span = info_span!("git.repository", ?intent, path = %path.display());
    let blocking = tracker.spawn_blocking(move || op(backend.as_ref(), &path));
    tracker.spawn(
        async move {
            let result = match blocking.await {
                Ok(result) => result,
                Err(e) => Err(GitError::Io {
                    path: PathBuf::new(),
                    message: format!("git task failed: {e}"),
                }),
            };
            match &result {
                Ok(repo) => tracing::info!(path = %repo.path.display(), "Repository ready"),
                Err(e) => tracing::warn!(error = %e, "Repository operation failed"),
            }
            let _ = tx.send(Action::RepositoryLoaded { intent, result }).await;
        }
        .instrument(span),
    );
}

fn spawn_clone(
    url: String,
    target: PathBuf,
    cancel: CancellationToken,
    backend: SharedBackend,
    tx: Sender<Action>,
    tracker: &TaskTracker,
) {
    let span = info_span!("git.clone", url = %url, target = %target.display());
    let mut on_progress = progress_callback_to_action_sender(tx.clone());
    let blocking = tracker.spawn_blocking(move || {
        backend.clone_repo(&url, &target, &mut on_progress, &cancel)
    });
    tracker.spawn(
        async move {
            let outcome = match blocking.await {
                Ok(outcome) => outcome,
                Err(e) => CloneOutcome::Failed(GitError::Io {
                    path: PathBuf::new(),
                    message: format!("clone task failed: {e}"),
                }),
            };
            match &outcome {
                CloneOutcome::Completed(repo) => {
                    tracing::info!(path = %repo.path.display(), "Clone completed");
                }
                CloneOutcome::Cancelled => tracing::info!("Clone cancelled"),
                CloneOutcome::Failed(e) => tracing::warn!(error = %e, "Clone failed"),
            }
            let _ = tx.send(Action::CloneFinished(outcome)).await;
        }
        .instrument(span),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::Git2Backend;
    use tempfile::TempDir;
    use tokio::sync::mpsc::channel;

    #[tokio::test]
    async fn test_create_then_open_reports_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("repo");
        let backend: SharedBackend = Arc::new(Git2Backend::new());
        let tracker = TaskTracker::new();
        let (tx, mut rx) = channel(8);

        handle_side_effects(
            Action::CreateRepository(path.clone()),
            backend.clone(),
            tx.clone(),
            tracker.clone(),
        )
        .await;
        match rx.recv().await {
            Some(Action::RepositoryLoaded {
                intent: RepoIntent::Create,
                result: Ok(repo),
            }) => assert_eq!(repo.name, "repo"),
            other => panic!("unexpected action: {other:?}"),
        }

        handle_side_effects(Action::OpenRepository(path), backend, tx, tracker.clone()).await;
        assert!(matches!(
            rx.recv().await,
            Some(Action::RepositoryLoaded {
                intent: RepoIntent::Open,
                result: Ok(_),
            })
        ));

        tracker.close();
        tracker.wait().await;
    }

    #[tokio::test]
    async fn test_open_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let backend: SharedBackend = Arc::new(Git2Backend::new());
        let tracker = TaskTracker::new();
        let (tx, mut rx) = channel(8);

        handle_side_effects(
            Action::OpenRepository(dir.path().to_path_buf()),
            backend,
            tx,
            tracker,
        )
        .await;
        assert!(matches!(
            rx.recv().await,
            Some(Action::RepositoryLoaded {
                intent: RepoIntent::Open,
                result: Err(GitError::Open { .. }),
            })
        ));
    }

    /// Reports one progress update, then blocks until cancelled.
    struct StallingBackend;

    impl crate::git::RepoValidator for StallingBackend {
        fn is_repository(&self, _path: &std::path::Path) -> bool {
            false
        }
    }

    impl GitBackend for StallingBackend {
        fn open(&self, path: &std::path::Path) -> Result<RepoSummary, GitError> {
            Err(GitError::Open {
                path: path.to_path_buf(),
                message: "unsupported".to_string(),
            })
        }

        fn init(&self, path: &std::path::Path, _flags: InitFlags) -> Result<RepoSummary, GitError> {
            Err(GitError::Init {
                path: path.to_path_buf(),
                message: "unsupported".to_string(),
            })
        }

        fn clone_repo(
            &self,
            _url: &str,
            _target: &std::path::Path,
            progress: &mut dyn FnMut(crate::git::CloneProgress),
            cancel: &CancellationToken,
        ) -> CloneOutcome {
            progress(crate::git::CloneProgress {
                received_objects: 1,
                total_objects: 4,
                ..Default::default()
            });
            while !cancel.is_cancelled() {
                std::thread::sleep(std::time::Duration::from_millis(5));
            }
            CloneOutcome::Cancelled
        }
    }

    #[tokio::test]
    async fn test_clone_cancelled_mid_transfer_reports_cancelled() {
        let backend: SharedBackend = Arc::new(StallingBackend);
        let tracker = TaskTracker::new();
        let (tx, mut rx) = channel(8);
        let cancel = CancellationToken::new();

        handle_side_effects(
            Action::StartClone {
                url: "https://example.invalid/repo.git".to_string(),
                target: PathBuf::from("/work/repo"),
                cancel: cancel.clone(),
            },
            backend,
            tx,
            tracker.clone(),
        )
        .await;

        let wait = std::time::Duration::from_secs(5);
        match tokio::time::timeout(wait, rx.recv()).await {
            Ok(Some(Action::CloneProgress(p))) => assert_eq!(p.total_objects, 4),
            other => panic!("expected progress, got {other:?}"),
        }

        cancel.cancel();
        assert!(matches!(
            tokio::time::timeout(wait, rx.recv()).await,
            Ok(Some(Action::CloneFinished(CloneOutcome::Cancelled)))
        ));

        tracker.close();
        tracker.wait().await;
    }

    #[tokio::test]
    async fn test_actions_without_side_effects_are_ignored() {
        let backend: SharedBackend = Arc::new(Git2Backend::new());
        let tracker = TaskTracker::new();
        let (tx, mut rx) = channel(8);
        handle_side_effects(Action::Tick, backend, tx, tracker.clone()).await;
        tracker.close();
        tracker.wait().await;
        assert!(rx.try_recv().is_err());
    }
}
