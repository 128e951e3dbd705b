//! Command-line argument parsing for thalia.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Settings loading or validation (see `runtime::startup`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.
//! - Running without a subcommand is the same as `thalia tui`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thalia_config::paths::default_cache_dir;

/// Command-line arguments for thalia.
///
/// Settings precedence (highest to lowest):
/// 1. CLI arguments (e.g., --config)
/// 2. The settings file
/// 3. Environment variables (e.g., THALIA_THEME)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "thalia",
    about = "Terminal user interface for Git repositories",
    version,
    after_help = "Examples:\n  thalia\n  thalia tui --no-mouse\n  thalia --config ~/thalia.toml\n  RUST_LOG=debug thalia --log-dir /tmp/thalia-logs\n"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the settings file
    #[arg(long, short = 'c', env = "THALIA_CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the recent-repository cache
    #[arg(long, env = "THALIA_CACHE_DIR", global = true)]
    pub cache_dir: Option<PathBuf>,

    /// Directory for log files [default: <cache-dir>/logs]
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Disable mouse support
    #[arg(long, global = true)]
    pub no_mouse: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Start the terminal UI (default)
    Tui,
}

impl Cli {
    /// The subcommand to run; `tui` when none was given.
    pub fn selected_command(&self) -> Command {
        self.command.unwrap_or(Command::Tui)
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(default_cache_dir)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| self.cache_dir().join("logs"))
    }
}
