//! Key handling: configurable keymaps and the typed commands they trigger.

pub mod commands;
pub mod keymap;

pub use commands::{DashboardCommand, GlobalCommand, UnknownCommand, WorkspaceCommand};
pub use keymap::{ContextKeymap, FooterHint, KeymapError, Keymaps};
