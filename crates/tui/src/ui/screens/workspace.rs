//! Workspace screen rendering.
//!
//! Five panels: branches and stashes on the left, the file view in the
//! middle, work tree files and commit history on the right. Panel content is
//! placeholder text for now.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use thalia_config::Theme;

use crate::git::RepoSummary;

/// Workspace panels in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspacePanel {
    Branches,
    Stashes,
    FileView,
    WorkTree,
    CommitHistory,
}

impl WorkspacePanel {
    pub const ALL: [Self; 5] = [
        Self::Branches,
        Self::Stashes,
        Self::FileView,
        Self::WorkTree,
        Self::CommitHistory,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Branches => "Branches",
            Self::Stashes => "Stashes",
            Self::FileView => "File View",
            Self::WorkTree => "Workspace Files",
            Self::CommitHistory => "Commit History",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let i = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceLayout {
    /// Rects in `WorkspacePanel::ALL` order.
    pub panels: [Rect; 5],
}

impl WorkspaceLayout {
    pub fn new(area: Rect) -> Self {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Percentage(60),
                Constraint::Percentage(20),
            ])
            .split(area);
        let halves = |rect: Rect| {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rect)
        };
        let left = halves(columns[0]);
        let right = halves(columns[2]);
        Self {
            panels: [left[0], left[1], columns[1], right[0], right[1]],
        }
    }

    pub fn panel_at(&self, column: u16, row: u16) -> Option<WorkspacePanel> {
        self.panels
            .iter()
            .zip(WorkspacePanel::ALL)
            .find(|(rect, _)| super::dashboard::contains(**rect, column, row))
            .map(|(_, panel)| panel)
    }
}

fn panel_body(panel: WorkspacePanel, repo: &RepoSummary) -> Vec<Line<'static>> {
    match panel {
        WorkspacePanel::Branches => match &repo.head {
            Some(head) => vec![Line::from(format!("* {head}"))],
            None => vec![Line::from("(no branch)")],
        },
        WorkspacePanel::FileView => vec![
            Line::from(Span::styled(
                repo.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(repo.path.display().to_string()),
        ],
        _ => Vec::new(),
    }
}

pub fn render_workspace(
    f: &mut Frame,
    area: Rect,
    repo: &RepoSummary,
    focus: WorkspacePanel,
    theme: &Theme,
) {
    let layout = WorkspaceLayout::new(area);
    for (panel, rect) in WorkspacePanel::ALL.into_iter().zip(layout.panels) {
        let border = if panel == focus {
            theme.accent
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                format!(" {} ", panel.title()),
                Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
            ));
        let alignment = if panel == WorkspacePanel::FileView {
            Alignment::Center
        } else {
            Alignment::Left
        };
        f.render_widget(
            Paragraph::new(panel_body(panel, repo))
                .style(Style::default().fg(theme.text))
                .alignment(alignment)
                .block(block),
            rect,
        );
    }
}
