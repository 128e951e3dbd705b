//! Git repository operations used by the dashboard.
//!
//! Responsibilities:
//! - Define the `GitBackend` seam (open, init, cancellable clone).
//! - Define `RepoValidator`, the probe the recent-repository cache uses.
//! - Provide the libgit2-backed implementation (`Git2Backend`).
//! - Resolve and validate clone target directories.
//!
//! Does NOT handle:
//! - Running operations off the UI task (see `runtime::side_effects`).
//! - Presenting errors to the user (see `app`).
//!
//! Invariants:
//! - Every backend call is blocking; callers run it on a blocking thread.
//! - `GitError` carries rendered messages only, so it is `Clone` and can
//!   travel inside `Action`.

mod clone_target;
mod git2_backend;

pub use clone_target::{is_valid_clone_target, repo_name_from_url, resolve_clone_target};
pub use git2_backend::Git2Backend;

use std::path::{Path, PathBuf};

use bitflags::bitflags;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Errors reported by git operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GitError {
    /// The path is not a repository or could not be opened.
    #[error("{message}")]
    Open { path: PathBuf, message: String },

    /// Repository creation failed.
    #[error("{message}")]
    Init { path: PathBuf, message: String },

    /// The clone failed before completing.
    #[error("{message}")]
    Clone { url: String, message: String },

    /// Filesystem work around a git operation failed.
    #[error("{path}: {message}")]
    Io { path: PathBuf, message: String },
}

bitflags! {
    /// Options for [`GitBackend::init`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InitFlags: u32 {
        /// Fail if a repository already exists at the path.
        const NO_REINIT = 1 << 0;
        /// Create the directory (and parents) when missing.
        const MKDIR = 1 << 1;
        /// Create a bare repository.
        const BARE = 1 << 2;
    }
}

/// What the UI needs to know about an opened repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSummary {
    /// Working directory, or the git dir for bare repositories.
    pub path: PathBuf,
    /// Last path component, used as a display name.
    pub name: String,
    /// Short name of HEAD, `None` when HEAD is unborn or detached.
    pub head: Option<String>,
    pub is_bare: bool,
}

impl RepoSummary {
    /// Display name for a repository rooted at `path`.
    pub fn name_for(path: &Path) -> String {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned())
    }
}

/// Transfer counters reported while cloning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CloneProgress {
    pub received_objects: usize,
    pub total_objects: usize,
    pub indexed_objects: usize,
    pub received_bytes: usize,
}

impl CloneProgress {
    /// Completed fraction in `[0.0, 1.0]`.
    pub fn ratio(&self) -> f64 {
        if self.total_objects == 0 {
            0.0
        } else {
            (self.received_objects as f64 / self.total_objects as f64).clamp(0.0, 1.0)
        }
    }
}

/// Terminal state of a clone. Cancellation is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneOutcome {
    Completed(RepoSummary),
    Cancelled,
    Failed(GitError),
}

/// Answers whether a directory holds a usable repository.
pub trait RepoValidator: Send + Sync {
    fn is_repository(&self, path: &Path) -> bool;
}

/// Blocking git operations.
pub trait GitBackend: RepoValidator {
    /// Open an existing repository.
    fn open(&self, path: &Path) -> Result<RepoSummary, GitError>;

    /// Create a repository.
    fn init(&self, path: &Path, flags: InitFlags) -> Result<RepoSummary, GitError>;

    /// Clone `url` into `target`, reporting transfer progress.
    ///
    /// The transfer aborts once `cancel` fires. A cancelled or failed clone
    /// removes what it wrote to `target`.
    fn clone_repo(
        &self,
        url: &str,
        target: &Path,
        progress: &mut dyn FnMut(CloneProgress),
        cancel: &CancellationToken,
    ) -> CloneOutcome;
}
