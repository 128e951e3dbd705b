//! Centralized constants for the Thalia workspace.
//!
//! This module contains default values used across crates to avoid
//! magic value duplication.

// =============================================================================
// Application identity
// =============================================================================

/// Application name used for platform directories and log file names.
pub const APP_NAME: &str = "thalia";

/// Prefix for environment variables that override settings.
pub const ENV_PREFIX: &str = "THALIA_";

/// Separator between nested setting names in environment variables,
/// e.g. `THALIA_DASHBOARD:TEXT_STYLE`.
pub const ENV_NESTED_DELIMITER: char = ':';

/// Environment variable naming an explicit settings file.
pub const ENV_CONFIG_FILE: &str = "THALIA_CONFIG_FILE";

/// File name of the settings file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name for user themes inside the config directory.
pub const THEME_DIR_NAME: &str = "themes";

// =============================================================================
// Dashboard defaults
// =============================================================================

/// Default banner text for the dashboard.
pub const DEFAULT_DASHBOARD_TEXT: &str = concat!(
    "████████ ██   ██  █████  ██      ██  █████  \n",
    "   ██    ██   ██ ██   ██ ██      ██ ██   ██ \n",
    "   ██    ███████ ███████ ██      ██ ███████ \n",
    "   ██    ██   ██ ██   ██ ██      ██ ██   ██ \n",
    "   ██    ██   ██ ██   ██ ███████ ██ ██   ██ \n",
);

/// Default style applied to the dashboard banner.
pub const DEFAULT_DASHBOARD_TEXT_STYLE: &str = "#8AADF4";

/// Maximum number of characters shown for a recent repository entry.
pub const RECENT_ENTRY_MAX_CHARS: usize = 40;

// =============================================================================
// Runtime defaults
// =============================================================================

/// File name of the recent-repository cache database.
pub const CACHE_DB_FILE_NAME: &str = "cache.db";

/// Capacity of the UI action channel.
pub const ACTION_CHANNEL_CAPACITY: usize = 256;

/// UI tick interval in milliseconds (drives toast expiry).
pub const UI_TICK_INTERVAL_MS: u64 = 250;

/// Default toast lifetime in seconds.
pub const DEFAULT_TOAST_TTL_SECS: u64 = 5;

/// Lifetime for error toasts in seconds.
pub const ERROR_TOAST_TTL_SECS: u64 = 8;

/// Maximum number of toasts displayed at once.
pub const MAX_VISIBLE_TOASTS: usize = 4;
