//! Dashboard screen rendering.
//!
//! Layout, top to bottom: banner, the Open / Clone / Create buttons, and the
//! "Recent Repositories" list. `DashboardLayout` is shared with mouse
//! handling so clicks land on what was drawn.

use std::path::Path;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph},
};
use thalia_config::Theme;
use thalia_config::constants::RECENT_ENTRY_MAX_CHARS;

use crate::input::DashboardCommand;

/// Dashboard buttons, left to right.
pub const DASHBOARD_BUTTONS: [(DashboardCommand, &str); 3] = [
    (DashboardCommand::OpenRepo, "Open"),
    (DashboardCommand::CloneRepo, "Clone"),
    (DashboardCommand::CreateRepo, "Create"),
];

const BUTTON_WIDTH: u16 = 12;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub banner: Rect,
    pub buttons: [Rect; 3],
    pub recent: Rect,
}

impl DashboardLayout {
    pub fn new(area: Rect, banner_lines: u16) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(banner_lines + 2),
                Constraint::Length(BUTTON_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(3),
            ])
            .split(area);

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(BUTTON_GAP),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(BUTTON_GAP),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Min(0),
            ])
            .split(rows[1]);

        let recent = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Percentage(60),
                Constraint::Percentage(20),
            ])
            .split(rows[3])[1];

        Self {
            banner: rows[0],
            buttons: [buttons[1], buttons[3], buttons[5]],
            recent,
        }
    }

    pub fn button_at(&self, column: u16, row: u16) -> Option<DashboardCommand> {
        self.buttons
            .iter()
            .zip(DASHBOARD_BUTTONS.iter())
            .find(|(rect, _)| contains(**rect, column, row))
            .map(|(_, (command, _))| *command)
    }

    /// Index of the recent entry drawn at `row`, given the list scroll offset.
    pub fn recent_at(&self, column: u16, row: u16, offset: usize, len: usize) -> Option<usize> {
        let inner = Block::default().borders(Borders::ALL).inner(self.recent);
        if !contains(inner, column, row) {
            return None;
        }
        let index = offset + usize::from(row - inner.y);
        (index < len).then_some(index)
    }
}

pub(crate) fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Display label for a recent repository: its directory name, truncated.
pub fn recent_label(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    if name.chars().count() <= RECENT_ENTRY_MAX_CHARS {
        return name;
    }
    let mut truncated: String = name.chars().take(RECENT_ENTRY_MAX_CHARS - 1).collect();
    truncated.push('…');
    truncated
}

pub struct DashboardView<'a> {
    pub banner: &'a str,
    pub banner_style: Style,
    pub recent: &'a [std::path::PathBuf],
    pub list_state: &'a mut ListState,
}

pub fn render_dashboard(f: &mut Frame, area: Rect, view: DashboardView<'_>, theme: &Theme) {
    let banner_lines = view.banner.lines().count() as u16;
    let layout = DashboardLayout::new(area, banner_lines);

    // Pad to a common width so centering keeps the block letters aligned.
    let width = view
        .banner
        .lines()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let banner: Vec<Line> = view
        .banner
        .lines()
        .map(|l| Line::styled(format!("{l:<width$}"), view.banner_style))
        .collect();
    f.render_widget(
        Paragraph::new(banner)
            .alignment(Alignment::Center)
            .block(Block::default().padding(Padding::vertical(1))),
        layout.banner,
    );

    for (rect, (_, label)) in layout.buttons.iter().zip(DASHBOARD_BUTTONS.iter()) {
        f.render_widget(
            Paragraph::new(Span::styled(
                *label,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border)),
            ),
            *rect,
        );
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            " Recent Repositories ",
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ));

    if view.recent.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "No recent repositories",
                Style::default().fg(theme.text_dim),
            )))
            .alignment(Alignment::Center)
            .block(block),
            layout.recent,
        );
        return;
    }

    let items: Vec<ListItem> = view
        .recent
        .iter()
        .map(|p| ListItem::new(recent_label(p)))
        .collect();
    let list = List::new(items)
        .block(block)
        .style(Style::default().fg(theme.text))
        .highlight_style(
            Style::default()
                .fg(theme.highlight_fg)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(list, layout.recent, view.list_state);
}
