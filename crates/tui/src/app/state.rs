//! Screen state types for the TUI app.

use std::path::PathBuf;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::ListState;

use crate::git::RepoSummary;
use crate::ui::screens::WorkspacePanel;

/// Height of the footer bar at the bottom of the screen.
pub const FOOTER_HEIGHT: u16 = 1;

/// Split the terminal area into (content, footer).
pub fn split_footer(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Recent repositories shown on the dashboard.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub recent: Vec<PathBuf>,
    pub list_state: ListState,
}

impl DashboardState {
    pub fn set_recent(&mut self, recent: Vec<PathBuf>) {
        let selected = self
            .list_state
            .selected()
            .map(|i| i.min(recent.len().saturating_sub(1)))
            .or(Some(0))
            .filter(|_| !recent.is_empty());
        self.recent = recent;
        self.list_state.select(selected);
    }

    pub fn selected_path(&self) -> Option<&PathBuf> {
        self.list_state.selected().and_then(|i| self.recent.get(i))
    }

    pub fn select_next(&mut self) {
        if self.recent.is_empty() {
            return;
        }
        let next = self
            .list_state
            .selected()
            .map_or(0, |i| (i + 1).min(self.recent.len() - 1));
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.recent.is_empty() {
            return;
        }
        let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev));
    }
}

/// An opened repository and the focused panel.
#[derive(Debug, Clone)]
pub struct WorkspaceState {
    pub repo: RepoSummary,
    pub focus: WorkspacePanel,
}

impl WorkspaceState {
    pub fn new(repo: RepoSummary) -> Self {
        Self {
            repo,
            focus: WorkspacePanel::FileView,
        }
    }
}

/// A screen on the screen stack.
#[derive(Debug, Clone)]
pub enum Screen {
    Dashboard,
    Workspace(WorkspaceState),
}

/// Which binding context is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentScreen {
    Dashboard,
    Workspace,
}

impl Screen {
    pub fn kind(&self) -> CurrentScreen {
        match self {
            Self::Dashboard => CurrentScreen::Dashboard,
            Self::Workspace(_) => CurrentScreen::Workspace,
        }
    }
}
