//! Thalia TUI library.
//!
//! Application state, input handling, UI rendering and the git and cache
//! layers behind the `thalia` binary.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use crossterm::event::{KeyCode, KeyEvent};
//! use thalia_config::Settings;
//! use thalia_tui::{App, cache::RecentRepoCache, git::Git2Backend, input::Keymaps};
//!
//! let settings = Settings::default();
//! let keymaps = Keymaps::from_settings(&settings).unwrap();
//! let cache = RecentRepoCache::open_in_memory().unwrap();
//! let mut app = App::new(&settings, keymaps, cache, Arc::new(Git2Backend::new()), "/".into());
//! if let Some(action) = app.handle_input(KeyEvent::from(KeyCode::Char('q'))) {
//!     // Handle action
//! }
//! ```

pub mod action;
pub mod app;
pub mod cache;
pub mod cli;
pub mod git;
pub mod input;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, CurrentScreen, FOOTER_HEIGHT};
pub use ui::popup::Modal;
pub use ui::toast::{Toast, ToastLevel};
