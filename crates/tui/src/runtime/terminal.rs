//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Enter and leave raw mode, the alternate screen and mouse capture.
//! - Restore the terminal on exit via Drop, even when the event loop panics.
//!
//! Does NOT handle:
//! - Drawing or event polling (done in `main.rs`).
//!
//! Invariants / Assumptions:
//! - Must be created after terminal setup is complete.
//! - Must live for the duration of the TUI session.
//! - Drop implementation must not panic.

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Enter raw mode and the alternate screen, capturing the mouse unless `no_mouse`.
pub fn enter_terminal(no_mouse: bool) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if no_mouse {
        execute!(stdout, EnterAlternateScreen)
    } else {
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
    }
}

/// Undo [`enter_terminal`].
pub fn restore_terminal(no_mouse: bool) -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    if no_mouse {
        execute!(stdout, LeaveAlternateScreen)
    } else {
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)
    }
}

/// Restores the terminal when dropped, including during a panic unwind.
pub struct TerminalGuard {
    no_mouse: bool,
}

impl TerminalGuard {
    /// `no_mouse` records whether mouse capture was left off during setup.
    pub fn new(no_mouse: bool) -> Self {
        Self { no_mouse }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: drop must not panic, and main() has usually
        // restored the terminal already.
        let _ = restore_terminal(self.no_mouse);
    }
}
