//! Action reducer for the TUI app.
//!
//! Responsibilities:
//! - Apply results of background git work to app state
//! - Expire toasts on tick
//!
//! Does NOT handle:
//! - Does NOT spawn work (see runtime::side_effects)
//! - Does NOT handle raw input events (see input.rs and mouse.rs)

use crate::action::Action;
use crate::app::App;
use crate::git::CloneOutcome;
use crate::ui::ToastLevel;
use crate::ui::popup::Modal;

impl App {
    /// Apply an action to app state.
    ///
    /// Trigger actions (open, create, clone) are no-ops here; the runtime
    /// executes them and reports back with a result action.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Tick => self.toasts.retain(|t| !t.is_expired()),
            Action::RepositoryLoaded { intent, result } => match result {
                Ok(repo) => self.open_workspace(repo),
                Err(e) => self.notify(ToastLevel::Error, Some(intent.failure_title()), e.to_string()),
            },
            Action::CloneProgress(progress) => {
                if let Some(view) = self.modals.iter_mut().rev().find_map(|m| match m {
                    Modal::CloneProgress(view) => Some(view),
                    _ => None,
                }) {
                    view.progress = progress;
                }
            }
            Action::CloneFinished(outcome) => self.finish_clone(outcome),
            Action::Quit
            | Action::Resize(..)
            | Action::Input(_)
            | Action::Mouse(_)
            | Action::OpenRepository(_)
            | Action::CreateRepository(_)
            | Action::StartClone { .. } => {}
        }
    }

    fn finish_clone(&mut self, outcome: CloneOutcome) {
        self.modals
            .retain(|m| !matches!(m, Modal::CloneProgress(_)));
        match outcome {
            CloneOutcome::Completed(repo) => {
                tracing::info!(path = %repo.path.display(), "Clone completed");
                self.open_workspace(repo);
            }
            CloneOutcome::Cancelled => {
                self.notify(ToastLevel::Info, None, "Clone operation was cancelled.");
            }
            CloneOutcome::Failed(e) => {
                self.notify(ToastLevel::Error, Some("Clone failed"), e.to_string());
            }
        }
    }

    /// Cancel the clone in progress, if any. Used on shutdown.
    pub fn cancel_active_clone(&self) {
        for modal in &self.modals {
            if let Modal::CloneProgress(view) = modal {
                view.cancel.cancel();
            }
        }
    }
}
