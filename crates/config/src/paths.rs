//! Platform directory helpers.
//!
//! Responsibilities:
//! - Determine default config, theme and cache locations and the home
//!   directory with the `directories` crate.
//!
//! Does NOT handle:
//! - Creating directories (see `Settings::validate` and the cache).

use std::env;
use std::path::PathBuf;

use crate::constants::{APP_NAME, CONFIG_FILE_NAME, THEME_DIR_NAME};

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Used when the platform offers no home directory.
fn fallback_root() -> PathBuf {
    env::temp_dir().join(APP_NAME)
}

/// Default configuration directory.
///
/// - Linux: `~/.config/thalia`
/// - macOS: `~/Library/Application Support/thalia`
/// - Windows: `%AppData%\thalia\config`
pub fn default_config_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| fallback_root().join("config"))
}

/// Default theme directory inside the config directory.
pub fn default_theme_dir() -> PathBuf {
    default_config_dir().join(THEME_DIR_NAME)
}

/// Default settings file path.
pub fn default_config_file() -> PathBuf {
    default_config_dir().join(CONFIG_FILE_NAME)
}

/// Default cache directory (recent repositories, logs).
pub fn default_cache_dir() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| fallback_root().join("cache"))
}

/// The user's home directory, falling back to the current directory.
pub fn home_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(fallback_root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_absolute_and_nested() {
        let config_dir = default_config_dir();
        assert!(config_dir.is_absolute());
        assert!(default_theme_dir().starts_with(&config_dir));
        assert_eq!(
            default_config_file().file_name().and_then(|n| n.to_str()),
            Some(CONFIG_FILE_NAME)
        );
        assert!(default_cache_dir().is_absolute());
        assert!(home_dir().is_absolute());
    }
}
