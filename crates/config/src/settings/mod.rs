//! Typed settings tree for Thalia.
//!
//! Responsibilities:
//! - Define the settings schema with defaults (`Settings`, `DashboardSettings`,
//!   `WorkspaceSettings`).
//! - Validate merged settings (paths, banner style).
//! - Expose the tree to the binding resolver through `SettingsNode`.
//!
//! Does NOT handle:
//! - Reading files or environment variables (see `loader`).
//!
//! Invariants:
//! - Unknown keys are rejected at every level.
//! - After `validate`, every path field is absolute and its directory exists.
//! - After `validate`, `dashboard.text_style` always parses.

mod node;

use std::path::{Path, PathBuf};

use ratatui::style::Style;
use serde::{Deserialize, Serialize};

pub use node::{SettingsField, SettingsNode};

use crate::bindings::{DashboardContext, GlobalContext, ScreenBindings, WorkspaceContext};
use crate::constants::{DEFAULT_DASHBOARD_TEXT, DEFAULT_DASHBOARD_TEXT_STYLE};
use crate::loader::ConfigError;
use crate::paths::{default_config_dir, default_config_file, default_theme_dir};
use crate::style::parse_style;
use crate::theme::ColorTheme;

/// Names of the top-level settings, as used in files and env variables.
pub const TOP_LEVEL_FIELDS: &[&str] = &[
    "dashboard",
    "workspace",
    "bindings",
    "theme",
    "config_dir",
    "theme_dir",
    "config_file",
];

/// Settings of the dashboard screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct DashboardSettings {
    /// Banner shown at the top of the dashboard.
    pub text: String,
    /// Style of the banner, e.g. `"bold #8AADF4"`.
    pub text_style: String,
    /// Dashboard bindings.
    pub bindings: ScreenBindings<DashboardContext>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            text: DEFAULT_DASHBOARD_TEXT.to_string(),
            text_style: DEFAULT_DASHBOARD_TEXT_STYLE.to_string(),
            bindings: ScreenBindings::default(),
        }
    }
}

impl DashboardSettings {
    /// The parsed banner style.
    pub fn banner_style(&self) -> Style {
        parse_style(&self.text_style)
            .or_else(|_| parse_style(DEFAULT_DASHBOARD_TEXT_STYLE))
            .unwrap_or_default()
    }
}

/// Settings of the workspace screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct WorkspaceSettings {
    /// Workspace bindings.
    pub bindings: ScreenBindings<WorkspaceContext>,
}

/// Root of the settings tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Settings {
    /// Dashboard screen settings.
    pub dashboard: DashboardSettings,
    /// Workspace screen settings.
    pub workspace: WorkspaceSettings,
    /// Bindings active on every screen.
    pub bindings: ScreenBindings<GlobalContext>,
    /// Color theme for the UI chrome.
    pub theme: ColorTheme,
    /// Directory for Thalia's configuration.
    pub config_dir: PathBuf,
    /// Directory for user themes.
    pub theme_dir: PathBuf,
    /// Path of the settings file.
    pub config_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dashboard: DashboardSettings::default(),
            workspace: WorkspaceSettings::default(),
            bindings: ScreenBindings::default(),
            theme: ColorTheme::default(),
            config_dir: default_config_dir(),
            theme_dir: default_theme_dir(),
            config_file: default_config_file(),
        }
    }
}

impl Settings {
    /// Check paths, create missing directories and repair the banner style.
    ///
    /// An unparsable `dashboard.text_style` falls back to the default style
    /// rather than failing.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        if let Err(e) = parse_style(&self.dashboard.text_style) {
            tracing::warn!(error = %e, "Invalid dashboard text style, using default");
            self.dashboard.text_style = DEFAULT_DASHBOARD_TEXT_STYLE.to_string();
        }

        ensure_dir("config_dir", &self.config_dir)?;
        ensure_dir("theme_dir", &self.theme_dir)?;
        require_absolute("config_file", &self.config_file)?;
        if let Some(parent) = self.config_file.parent() {
            create_dir(parent)?;
        }

        Ok(self)
    }
}

fn require_absolute(field: &'static str, path: &Path) -> Result<(), ConfigError> {
    if path.is_absolute() {
        Ok(())
    } else {
        Err(ConfigError::RelativePath {
            field,
            path: path.to_path_buf(),
        })
    }
}

fn ensure_dir(field: &'static str, path: &Path) -> Result<(), ConfigError> {
    require_absolute(field, path)?;
    create_dir(path)
}

fn create_dir(path: &Path) -> Result<(), ConfigError> {
    std::fs::create_dir_all(path).map_err(|source| ConfigError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
