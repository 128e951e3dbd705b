//! Action enum definitions for the TUI event system.
//!
//! # Action Categories
//!
//! - **System**: lifecycle and terminal events (Quit, Tick, Resize)
//! - **Input**: raw keyboard and mouse events
//! - **Git Triggers**: requests the runtime executes on a blocking thread
//! - **Git Results**: outcomes sent back by those tasks

use std::path::PathBuf;

use crossterm::event::{KeyEvent, MouseEvent};
use tokio_util::sync::CancellationToken;

use crate::git::{CloneOutcome, CloneProgress, GitError, RepoSummary};

/// Why a repository is being opened. Selects the failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoIntent {
    Open,
    Create,
    Clone,
}

impl RepoIntent {
    /// Toast title shown when the operation fails.
    pub fn failure_title(self) -> &'static str {
        match self {
            Self::Open => "Unable to open repository",
            Self::Create => "Repository creation failed",
            Self::Clone => "Clone failed",
        }
    }
}

/// Unified action type.
#[derive(Debug, Clone)]
pub enum Action {
    // System
    /// Quit the application
    Quit,
    /// Periodic UI tick (expires toasts)
    Tick,
    /// Terminal resized to (width, height)
    Resize(u16, u16),

    // Input
    /// Raw keyboard input event
    Input(KeyEvent),
    /// Raw mouse input event
    Mouse(MouseEvent),

    // Git triggers
    /// Open the repository at the path
    OpenRepository(PathBuf),
    /// Create a repository at the path
    CreateRepository(PathBuf),
    /// Clone `url` into `target`; `cancel` aborts the transfer
    StartClone {
        url: String,
        target: PathBuf,
        cancel: CancellationToken,
    },

    // Git results
    /// An open or create request finished
    RepositoryLoaded {
        intent: RepoIntent,
        result: Result<RepoSummary, GitError>,
    },
    /// Transfer counters from a running clone
    CloneProgress(CloneProgress),
    /// A clone reached a terminal state
    CloneFinished(CloneOutcome),
}

impl Action {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::Tick => "Tick",
            Self::Resize(..) => "Resize",
            Self::Input(_) => "Input",
            Self::Mouse(_) => "Mouse",
            Self::OpenRepository(_) => "OpenRepository",
            Self::CreateRepository(_) => "CreateRepository",
            Self::StartClone { .. } => "StartClone",
            Self::RepositoryLoaded { .. } => "RepositoryLoaded",
            Self::CloneProgress(_) => "CloneProgress",
            Self::CloneFinished(_) => "CloneFinished",
        }
    }

    /// Whether the runtime must start background work for this action.
    pub fn has_side_effect(&self) -> bool {
        matches!(
            self,
            Self::OpenRepository(_) | Self::CreateRepository(_) | Self::StartClone { .. }
        )
    }
}
