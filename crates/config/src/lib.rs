//! Settings and key bindings for Thalia.
//!
//! This crate provides the typed settings tree, its loader (TOML file,
//! `THALIA_*` environment variables, `.env`), the per-context action
//! registries, and the resolver that turns binding settings into
//! UI-ready bindings.

pub mod bindings;
pub mod constants;
pub mod keybind;
mod loader;
pub mod paths;
pub mod settings;
pub mod style;
pub mod theme;

pub use bindings::{
    ActionRegistry, BindingError, BindingSpec, KeySpec, ResolvedBinding, ScreenBindings,
    resolve_bindings,
};
pub use loader::{ConfigError, SettingsLoader, env_var_or_none};
pub use settings::{DashboardSettings, Settings, SettingsNode, WorkspaceSettings};
pub use theme::{ColorTheme, Theme};
