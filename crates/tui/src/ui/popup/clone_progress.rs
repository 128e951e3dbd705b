//! Progress modal shown while a clone runs.

use std::path::PathBuf;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
};
use thalia_config::Theme;
use tokio_util::sync::CancellationToken;

use super::{fixed_centered, render_button};
use crate::git::CloneProgress;

#[derive(Debug, Clone)]
pub struct CloneProgressView {
    pub url: String,
    pub target: PathBuf,
    pub progress: CloneProgress,
    pub cancel: CancellationToken,
}

impl CloneProgressView {
    pub fn new(url: String, target: PathBuf, cancel: CancellationToken) -> Self {
        Self {
            url,
            target,
            progress: CloneProgress::default(),
            cancel,
        }
    }

    pub fn title(&self) -> String {
        format!("Cloning {} into {}", self.url, self.target.display())
    }

    pub fn is_cancelling(&self) -> bool {
        self.cancel.is_cancelled()
    }

    fn gauge_label(&self) -> String {
        if self.is_cancelling() {
            "Cancelling...".to_string()
        } else if self.progress.total_objects == 0 {
            "Connecting...".to_string()
        } else {
            format!(
                "{}/{} objects",
                self.progress.received_objects, self.progress.total_objects
            )
        }
    }
}

/// Screen regions of the modal, shared by rendering and mouse handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloneProgressLayout {
    pub outer: Rect,
    pub title: Rect,
    pub gauge: Rect,
    pub cancel_button: Rect,
}

impl CloneProgressLayout {
    pub fn new(area: Rect) -> Self {
        let outer = fixed_centered(64, 8, area);
        let inner = Block::default().borders(Borders::ALL).inner(outer);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);
        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(10)])
            .split(rows[3]);
        Self {
            outer,
            title: rows[0],
            gauge: rows[1],
            cancel_button: buttons[1],
        }
    }
}

pub fn render_clone_progress(f: &mut Frame, view: &CloneProgressView, theme: &Theme) {
    let layout = CloneProgressLayout::new(f.area());
    f.render_widget(Clear, layout.outer);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border)),
        layout.outer,
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            view.title(),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ))
        .wrap(Wrap { trim: true }),
        layout.title,
    );
    f.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(theme.accent).bg(theme.highlight_bg))
            .ratio(view.progress.ratio())
            .label(view.gauge_label()),
        layout.gauge,
    );
    render_button(
        f,
        layout.cancel_button,
        "Cancel",
        !view.is_cancelling(),
        theme,
    );
}
