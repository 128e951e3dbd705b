//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Logging setup
//! - Settings, keymap and cache loading at startup
//! - Background git operations triggered by actions
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `thalia_tui::app` and `thalia_tui::ui`).
//! - Repository access itself (see `thalia_tui::git`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.
//! - Git operations run on blocking threads to keep the UI responsive.

pub mod logging;
pub mod side_effects;
pub mod startup;
pub mod terminal;
