//! Thalia - Terminal user interface for Git repositories.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Settings parsing and key binding resolution (see `thalia_config`).
//! - Repository access (see `thalia_tui::git`).
//! - Background git work (see `runtime::side_effects`).
//!
//! Invariants:
//! - Settings, keymaps and the cache load before the terminal enters raw mode,
//!   so startup errors print to a normal terminal.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.
//! - Quitting cancels a running clone and waits for tracked tasks.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{Sender, channel, error::TrySendError};
use tokio_util::sync::CancellationToken;

use thalia_config::constants::{ACTION_CHANNEL_CAPACITY, UI_TICK_INTERVAL_MS};
use thalia_config::paths::home_dir;
use thalia_tui::action::Action;
use thalia_tui::app::App;
use thalia_tui::cli::Cli;
use thalia_tui::git::Git2Backend;
use thalia_tui::runtime::{
    logging::init_logging,
    side_effects::{SharedBackend, TaskTracker, handle_side_effects},
    startup::{Startup, prepare},
    terminal::{TerminalGuard, enter_terminal, restore_terminal},
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let no_mouse = cli.no_mouse;

    // Guard must live for the whole of main() so buffered logs are flushed.
    let _log_guard = init_logging(&cli.log_dir())?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        command = ?cli.selected_command(),
        "Starting thalia"
    );

    let Startup {
        settings,
        keymaps,
        cache,
    } = prepare(&cli)?;

    let git = Arc::new(Git2Backend::new());
    let backend: SharedBackend = git.clone();
    let mut app = App::new(&settings, keymaps, cache, git, home_dir());

    let task_tracker = TaskTracker::new();
    let shutdown = CancellationToken::new();

    enter_terminal(no_mouse).context("Failed to set up terminal")?;
    // Restores the terminal on panic or early return.
    let _terminal_guard = TerminalGuard::new(no_mouse);

    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (tx, mut rx) = channel::<Action>(ACTION_CHANNEL_CAPACITY);

    task_tracker.spawn(read_input(tx.clone(), shutdown.clone()));

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(UI_TICK_INTERVAL_MS));

    // Main event loop
    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                let action = match action {
                    Action::Input(key) => app.handle_input(key),
                    Action::Mouse(mouse) => app.handle_mouse(mouse),
                    // Redrawn at the top of the loop.
                    Action::Resize(..) => None,
                    other => Some(other),
                };
                let Some(action) = action else {
                    continue;
                };

                if matches!(action, Action::Quit) {
                    tracing::info!("Quit requested");
                    break;
                }

                if action.has_side_effect() {
                    handle_side_effects(
                        action,
                        backend.clone(),
                        tx.clone(),
                        task_tracker.clone(),
                    )
                    .await;
                } else {
                    app.update(action);
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    // Graceful shutdown: stop input, abort clones, then wait for tasks.
    shutdown.cancel();
    app.cancel_active_clone();
    drop(tx);
    drop(rx);
    task_tracker.close();
    task_tracker.wait().await;

    restore_terminal(no_mouse)?;
    terminal.show_cursor()?;

    tracing::info!("Exited cleanly");
    Ok(())
}

/// Forward terminal events into the action channel until `shutdown` fires.
///
/// Keys and resizes wait for channel space; mouse events are dropped when
/// the channel is full.
async fn read_input(tx: Sender<Action>, shutdown: CancellationToken) {
    let mut reader = EventStream::new();
    loop {
        let event = tokio::select! {
            _ = shutdown.cancelled() => break,
            event = reader.next() => event,
        };
        let event = match event {
            Some(Ok(event)) => event,
            Some(Err(e)) => {
                tracing::error!(error = %e, "Terminal event stream failed");
                break;
            }
            None => break,
        };

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if tx.send(Action::Input(key)).await.is_err() {
                    break;
                }
            }
            Event::Resize(width, height) => {
                if tx.send(Action::Resize(width, height)).await.is_err() {
                    break;
                }
            }
            Event::Mouse(mouse) => match tx.try_send(Action::Mouse(mouse)) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    tracing::debug!("Input channel full, dropping mouse event");
                }
                Err(TrySendError::Closed(_)) => break,
            },
            _ => {}
        }
    }
}
