//! Action protocol for async TUI event handling.
//!
//! Actions represent user input, requests for background git work, and the
//! results of that work. They flow through one channel into `App::update`.
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (handled by the app state machine in `App`)
//! - Background task execution (handled by `runtime::side_effects`)
//! - UI rendering (handled by the ui module)

use tokio::sync::mpsc::{Sender, error::TrySendError};

pub mod variants;

pub use variants::{Action, RepoIntent};

use crate::git::CloneProgress;

/// Bridge libgit2's synchronous progress callback to the action channel.
///
/// Updates are sent with `try_send`; when the channel is full the update is
/// dropped, since a later one supersedes it.
pub fn progress_callback_to_action_sender(tx: Sender<Action>) -> impl FnMut(CloneProgress) + Send {
    let mut last = CloneProgress::default();
    move |progress: CloneProgress| {
        if progress == last {
            return;
        }
        last = progress;
        match tx.try_send(Action::CloneProgress(progress)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {}
            Err(TrySendError::Closed(_)) => {}
        }
    }
}
