//! Settings loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `SettingsLoader` that merges settings layers.
//! - Load the TOML settings file and the `THALIA_*` environment overlay.
//! - Build and validate the final `Settings`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Binding resolution (see `bindings`).
//!
//! Invariants / Assumptions:
//! - Precedence, highest first: builder values, settings file, environment,
//!   `.env` file, defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - A missing settings file is not an error.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::env::{env_layer, env_var_or_none};
use super::error::ConfigError;
use crate::constants::ENV_CONFIG_FILE;
use crate::paths::default_config_file;
use crate::settings::Settings;
use crate::theme::ColorTheme;

/// Builds [`Settings`] from defaults, a settings file, the environment and
/// explicit overrides.
#[derive(Debug, Default)]
pub struct SettingsLoader {
    config_file: Option<PathBuf>,
    file_layer: Option<Value>,
    env_layer: Option<Value>,
    overrides: Map<String, Value>,
}

impl SettingsLoader {
    /// Create a new settings loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing). Variables
    /// already present in the process environment win over the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but cannot be read or
    /// parsed. Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Use an explicit settings file instead of `THALIA_CONFIG_FILE` or the
    /// default location.
    pub fn with_config_file(mut self, path: PathBuf) -> Self {
        self = self.with_path_override("config_file", &path);
        self.config_file = Some(path);
        self
    }

    /// Override the config directory.
    pub fn with_config_dir(self, path: PathBuf) -> Self {
        self.with_path_override("config_dir", &path)
    }

    /// Override the theme directory.
    pub fn with_theme_dir(self, path: PathBuf) -> Self {
        self.with_path_override("theme_dir", &path)
    }

    /// Override the color theme.
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        if let Ok(value) = serde_json::to_value(theme) {
            self.overrides.insert("theme".to_string(), value);
        }
        self
    }

    fn with_path_override(mut self, field: &str, path: &Path) -> Self {
        self.overrides.insert(
            field.to_string(),
            Value::String(path.to_string_lossy().into_owned()),
        );
        self
    }

    /// The settings file this loader reads, if any is configured.
    pub fn config_file_path(&self) -> PathBuf {
        self.config_file
            .clone()
            .or_else(|| env_var_or_none(ENV_CONFIG_FILE).map(PathBuf::from))
            .unwrap_or_else(default_config_file)
    }

    /// Read the settings file.
    ///
    /// The path is, in order: the builder value, `THALIA_CONFIG_FILE`, the
    /// platform default. A path that does not exist is skipped.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        let path = self.config_file_path();
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "No settings file found, using defaults");
            return Ok(self);
        }

        let contents =
            std::fs::read_to_string(&path).map_err(|source| ConfigError::ConfigFileRead {
                path: path.clone(),
                source,
            })?;
        let table: toml::Table =
            toml::from_str(&contents).map_err(|e| ConfigError::ConfigFileParse {
                path: path.clone(),
                message: e.to_string(),
            })?;
        let layer = serde_json::to_value(table).map_err(|e| ConfigError::ConfigFileParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        tracing::info!(path = %path.display(), "Loaded settings file");
        self.file_layer = Some(layer);
        Ok(self)
    }

    /// Read the `THALIA_*` environment overlay.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        self.env_layer = Some(env_layer()?);
        Ok(self)
    }

    /// Merge all layers, deserialize and validate.
    pub fn build(self) -> Result<Settings, ConfigError> {
        let mut merged = Value::Object(Map::new());
        for layer in [self.env_layer, self.file_layer, Some(Value::Object(self.overrides))]
            .into_iter()
            .flatten()
        {
            merge(&mut merged, layer);
        }

        let settings: Settings = serde_json::from_value(merged)
            .map_err(|e| ConfigError::InvalidSettings(e.to_string()))?;
        settings.validate()
    }
}

/// Deep-merge `overlay` into `base`; tables merge, everything else replaces.
fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
