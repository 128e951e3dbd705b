//! Settings loader for files and environment variables.
//!
//! Responsibilities:
//! - Load settings from `.env` files, environment variables and a TOML file.
//! - Provide a builder-pattern `SettingsLoader` for layered merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Binding resolution (see `bindings`).
//! - Writing settings back to disk.
//!
//! Invariants / Assumptions:
//! - The settings file takes precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;

pub use builder::SettingsLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
