//! Application state and rendering.
//!
//! The module is organized into submodules:
//! - `state`: Screen stack and per-screen state types
//! - `input`: Keyboard handling for screens and modals
//! - `actions`: Action reducer (results of background work, notifications)
//! - `mouse`: Mouse event handling
//! - `render`: Rendering logic
//!
//! Invariants:
//! - The dashboard is always the bottom of the screen stack.
//! - Only the topmost modal receives input.

pub mod state;

mod actions;
mod input;
mod mouse;
mod render;

pub use state::{
    CurrentScreen, DashboardState, FOOTER_HEIGHT, Screen, WorkspaceState, split_footer,
};

use std::path::PathBuf;
use std::sync::Arc;

use ratatui::layout::Rect;
use ratatui::style::Style;
use thalia_config::{Settings, Theme};

use crate::cache::RecentRepoCache;
use crate::git::{RepoSummary, RepoValidator};
use crate::input::Keymaps;
use crate::ui::popup::Modal;
use crate::ui::{Toast, ToastLevel};

/// Main application state.
pub struct App {
    /// Screen stack; the dashboard sits at index 0.
    pub screens: Vec<Screen>,
    pub dashboard: DashboardState,
    /// Open modals, topmost last.
    pub modals: Vec<Modal>,
    pub toasts: Vec<Toast>,
    pub keymaps: Keymaps,
    pub banner: String,
    pub banner_style: Style,
    pub theme: Theme,
    pub cache: RecentRepoCache,
    validator: Arc<dyn RepoValidator>,
    /// Default clone target.
    pub home_dir: PathBuf,
    /// Where directory pickers start.
    pub start_dir: PathBuf,
    /// Terminal area of the last frame, for mouse hit-testing.
    pub last_area: Rect,
}

impl App {
    /// Create the app on the dashboard and load the recent list.
    pub fn new(
        settings: &Settings,
        keymaps: Keymaps,
        cache: RecentRepoCache,
        validator: Arc<dyn RepoValidator>,
        home_dir: PathBuf,
    ) -> Self {
        let start_dir = std::env::current_dir().unwrap_or_else(|_| home_dir.clone());
        let mut app = Self {
            screens: vec![Screen::Dashboard],
            dashboard: DashboardState::default(),
            modals: Vec::new(),
            toasts: Vec::new(),
            keymaps,
            banner: settings.dashboard.text.clone(),
            banner_style: settings.dashboard.banner_style(),
            theme: Theme::from_color_theme(settings.theme),
            cache,
            validator,
            home_dir,
            start_dir,
            last_area: Rect::default(),
        };
        app.refresh_recent();
        app
    }

    /// Reload the recent list, pruning entries that are no longer repositories.
    pub fn refresh_recent(&mut self) {
        let recent: Vec<PathBuf> = self.cache.list_recent(self.validator.as_ref()).collect();
        tracing::debug!(count = recent.len(), "Loaded recent repositories");
        self.dashboard.set_recent(recent);
    }

    pub fn current_screen(&self) -> CurrentScreen {
        self.screens
            .last()
            .map_or(CurrentScreen::Dashboard, Screen::kind)
    }

    /// The workspace on top of the stack, if any.
    pub fn workspace(&self) -> Option<&WorkspaceState> {
        match self.screens.last() {
            Some(Screen::Workspace(ws)) => Some(ws),
            _ => None,
        }
    }

    pub fn workspace_mut(&mut self) -> Option<&mut WorkspaceState> {
        match self.screens.last_mut() {
            Some(Screen::Workspace(ws)) => Some(ws),
            _ => None,
        }
    }

    pub fn has_modal(&self) -> bool {
        !self.modals.is_empty()
    }

    /// Queue a toast.
    pub fn notify(&mut self, level: ToastLevel, title: Option<&str>, message: impl Into<String>) {
        let mut toast = Toast::new(message.into(), level);
        if let Some(title) = title {
            toast = toast.with_title(title);
        }
        match level {
            ToastLevel::Error => tracing::error!(title, message = %toast.message, "Notification"),
            ToastLevel::Warning => tracing::warn!(title, message = %toast.message, "Notification"),
            _ => tracing::info!(title, message = %toast.message, "Notification"),
        }
        self.toasts.push(toast);
    }

    /// Record `repo` as recently opened and show it in a workspace screen.
    ///
    /// A cache write failure is only a warning; the workspace opens anyway.
    pub fn open_workspace(&mut self, repo: RepoSummary) {
        if let Err(e) = self.cache.record_opened(&repo.path) {
            tracing::warn!(path = %repo.path.display(), error = %e, "Failed to record repository");
            self.notify(
                ToastLevel::Warning,
                Some("Failed to insert into cache"),
                "Repository might not show up in recently opened list",
            );
        }
        tracing::info!(path = %repo.path.display(), "Opened repository");
        self.refresh_recent();
        self.screens.push(Screen::Workspace(WorkspaceState::new(repo)));
    }
}
