//! libgit2-backed [`GitBackend`].

use std::path::{Path, PathBuf};

use git2::build::RepoBuilder;
use git2::{FetchOptions, RemoteCallbacks, Repository, RepositoryInitOptions};
use tokio_util::sync::CancellationToken;

use super::{
    CloneOutcome, CloneProgress, GitBackend, GitError, InitFlags, RepoSummary, RepoValidator,
    is_valid_clone_target,
};

/// Git operations through `git2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Git2Backend;

impl Git2Backend {
    pub fn new() -> Self {
        Self
    }
}

fn summarize(repo: &Repository) -> RepoSummary {
    // libgit2 reports directories with a trailing separator
    let path: PathBuf = repo
        .workdir()
        .unwrap_or_else(|| repo.path())
        .components()
        .collect();
    let head = match repo.head_detached() {
        Ok(false) => repo
            .head()
            .ok()
            .and_then(|r| r.shorthand().map(str::to_string)),
        _ => None,
    };
    RepoSummary {
        name: RepoSummary::name_for(&path),
        path,
        head,
        is_bare: repo.is_bare(),
    }
}

impl RepoValidator for Git2Backend {
    fn is_repository(&self, path: &Path) -> bool {
        Repository::open(path).is_ok()
    }
}

impl GitBackend for Git2Backend {
    fn open(&self, path: &Path) -> Result<RepoSummary, GitError> {
        let repo = Repository::open(path).map_err(|e| GitError::Open {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        tracing::debug!(path = %path.display(), "Opened repository");
        Ok(summarize(&repo))
    }

    fn init(&self, path: &Path, flags: InitFlags) -> Result<RepoSummary, GitError> {
        let mut opts = RepositoryInitOptions::new();
        opts.no_reinit(flags.contains(InitFlags::NO_REINIT))
            .mkdir(flags.contains(InitFlags::MKDIR))
            .mkpath(flags.contains(InitFlags::MKDIR))
            .bare(flags.contains(InitFlags::BARE));

        let repo = Repository::init_opts(path, &opts).map_err(|e| GitError::Init {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        tracing::info!(path = %path.display(), "Created repository");
        Ok(summarize(&repo))
    }

    fn clone_repo(
        &self,
        url: &str,
        target: &Path,
        progress: &mut dyn FnMut(CloneProgress),
        cancel: &CancellationToken,
    ) -> CloneOutcome {
        if cancel.is_cancelled() {
            return CloneOutcome::Cancelled;
        }

        if !is_valid_clone_target(target) {
            tracing::warn!(target = %target.display(), "Refusing to clone into a non-empty path");
            return CloneOutcome::Failed(GitError::Clone {
                url: url.to_string(),
                message: format!(
                    "'{}' exists and is not an empty directory",
                    target.display()
                ),
            });
        }

        // Only an empty directory gets here, so emptying it on cleanup
        // restores its prior state.
        let existed = target.exists();
        let result = {
            let mut callbacks = RemoteCallbacks::new();
            callbacks.transfer_progress(|stats| {
                progress(CloneProgress {
                    received_objects: stats.received_objects(),
                    total_objects: stats.total_objects(),
                    indexed_objects: stats.indexed_objects(),
                    received_bytes: stats.received_bytes(),
                });
                !cancel.is_cancelled()
            });
            callbacks.sideband_progress(|_| !cancel.is_cancelled());

            let mut fetch = FetchOptions::new();
            fetch.remote_callbacks(callbacks);

            let mut builder = RepoBuilder::new();
            builder.fetch_options(fetch);
            builder.clone(url, target)
        };

        match result {
            Ok(_) if cancel.is_cancelled() => {
                discard_clone(target, existed);
                CloneOutcome::Cancelled
            }
            Ok(repo) => {
                tracing::info!(url, target = %target.display(), "Clone completed");
                CloneOutcome::Completed(summarize(&repo))
            }
            Err(_) if cancel.is_cancelled() => {
                tracing::info!(url, "Clone cancelled");
                discard_clone(target, existed);
                CloneOutcome::Cancelled
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "Clone failed");
                discard_clone(target, existed);
                CloneOutcome::Failed(GitError::Clone {
                    url: url.to_string(),
                    message: e.message().to_string(),
                })
            }
        }
    }
}

/// Remove what a clone left behind.
///
/// A directory the clone created is removed. A pre-existing one, which was
/// empty before the clone, is emptied.
fn discard_clone(target: &Path, existed: bool) {
    let result = if existed {
        empty_dir(target)
    } else {
        std::fs::remove_dir_all(target)
    };
    match result {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(target = %target.display(), error = %e, "Failed to clean up clone target");
        }
    }
}

fn empty_dir(dir: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            std::fs::remove_dir_all(&path)?;
        } else {
            std::fs::remove_file(&path)?;
        }
    }
    Ok(())
}
