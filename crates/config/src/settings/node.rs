//! Name-based traversal of the settings tree.

use super::{DashboardSettings, Settings, WorkspaceSettings};
use crate::bindings::BindingSet;

/// What a named field of a settings node holds.
pub enum SettingsField<'a> {
    /// A nested group of settings.
    Node(&'a dyn SettingsNode),
    /// A binding set for one UI context.
    Bindings(&'a dyn BindingSet),
    /// A plain value (string, path, theme, ...).
    Value,
}

/// A node of the settings tree that can be walked by field name.
pub trait SettingsNode {
    /// Look up a direct child by its settings name.
    fn get_field(&self, name: &str) -> Option<SettingsField<'_>>;
}

impl SettingsNode for Settings {
    fn get_field(&self, name: &str) -> Option<SettingsField<'_>> {
        match name {
            "dashboard" => Some(SettingsField::Node(&self.dashboard)),
            "workspace" => Some(SettingsField::Node(&self.workspace)),
            "bindings" => Some(SettingsField::Bindings(&self.bindings)),
            "theme" | "config_dir" | "theme_dir" | "config_file" => Some(SettingsField::Value),
            _ => None,
        }
    }
}

impl SettingsNode for DashboardSettings {
    fn get_field(&self, name: &str) -> Option<SettingsField<'_>> {
        match name {
            "bindings" => Some(SettingsField::Bindings(&self.bindings)),
            "text" | "text_style" => Some(SettingsField::Value),
            _ => None,
        }
    }
}

impl SettingsNode for WorkspaceSettings {
    fn get_field(&self, name: &str) -> Option<SettingsField<'_>> {
        match name {
            "bindings" => Some(SettingsField::Bindings(&self.bindings)),
            _ => None,
        }
    }
}
