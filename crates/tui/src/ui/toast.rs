//! Toast notification widgets for transient feedback messages.
//!
//! Toasts are shown in the bottom-right corner above the footer. Each has a
//! unique id, a severity level, an optional title and an expiry time.

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use thalia_config::Theme;
use thalia_config::constants::{DEFAULT_TOAST_TTL_SECS, ERROR_TOAST_TTL_SECS, MAX_VISIBLE_TOASTS};
use uuid::Uuid;

use crate::app::FOOTER_HEIGHT;

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

impl ToastLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Error => "ERR",
        }
    }

    /// Returns the TTL (time-to-live) for this level.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info | Self::Warning => {
                Duration::from_secs(DEFAULT_TOAST_TTL_SECS)
            }
            Self::Error => Duration::from_secs(ERROR_TOAST_TTL_SECS),
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub title: Option<String>,
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
    pub ttl: Duration,
}

impl Toast {
    /// Creates a new toast with the given message and level.
    pub fn new(message: String, level: ToastLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: None,
            message,
            level,
            created_at: Instant::now(),
            ttl: level.ttl(),
        }
    }

    /// Attach a title shown above the message.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Returns true if this toast has expired (TTL elapsed).
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }

    /// Lines of text inside the border: title, then wrapped message.
    fn body_height(&self, width: usize) -> u16 {
        let width = width.max(1);
        let message_lines = self
            .message
            .lines()
            .map(|l| l.chars().count().div_ceil(width).max(1))
            .sum::<usize>()
            .clamp(1, 3);
        let title_lines = usize::from(self.title.is_some());
        (message_lines + title_lines) as u16
    }
}

const TOAST_WIDTH: u16 = 48;

/// Renders all active toasts in the bottom-right corner.
///
/// The most recent toast is at the bottom. At most `MAX_VISIBLE_TOASTS`
/// are drawn.
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], theme: &Theme) {
    let active: Vec<_> = toasts.iter().filter(|t| !t.is_expired()).collect();
    if active.is_empty() {
        return;
    }
    let skip = active.len().saturating_sub(MAX_VISIBLE_TOASTS);
    let active = &active[skip..];

    let area = f.area();
    let width = TOAST_WIDTH.min(area.width.saturating_sub(2));
    if width < 12 {
        return;
    }
    let inner_width = usize::from(width.saturating_sub(2));
    let heights: Vec<u16> = active.iter().map(|t| t.body_height(inner_width) + 2).collect();
    let total_height: u16 = heights.iter().sum();
    let available = area.height.saturating_sub(FOOTER_HEIGHT + 1);
    if total_height > available {
        return;
    }

    let toast_area = Rect {
        x: area.width.saturating_sub(width + 1),
        y: available - total_height,
        width,
        height: total_height,
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(heights.iter().map(|h| Constraint::Length(*h)).collect::<Vec<_>>())
        .split(toast_area);

    for (toast, chunk) in active.iter().zip(chunks.iter()) {
        render_single_toast(f, toast, *chunk, theme);
    }
}

fn render_single_toast(f: &mut Frame, toast: &Toast, area: Rect, theme: &Theme) {
    let color = match toast.level {
        ToastLevel::Info => theme.info,
        ToastLevel::Warning => theme.warning,
        ToastLevel::Error => theme.error,
    };

    let mut lines = Vec::new();
    if let Some(title) = &toast.title {
        lines.push(Line::from(Span::styled(
            title.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )));
    }
    lines.extend(
        toast
            .message
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(theme.text)))),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(
            format!(" {} ", toast.level.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
