//! Clone parameters modal: repository URL and target directory.

use std::path::PathBuf;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use thalia_config::Theme;

use super::{fixed_centered, render_button};

/// Focusable elements of the form, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloneField {
    Url,
    Browse,
    Clone,
    Cancel,
}

impl CloneField {
    const ORDER: [Self; 4] = [Self::Url, Self::Browse, Self::Clone, Self::Cancel];

    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn previous(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneForm {
    pub url: String,
    /// Target directory; starts as the default directory.
    pub target: PathBuf,
    pub default_dir: PathBuf,
    pub focus: CloneField,
}

impl CloneForm {
    pub fn new(default_dir: PathBuf) -> Self {
        Self {
            url: String::new(),
            target: default_dir.clone(),
            default_dir,
            focus: CloneField::Url,
        }
    }
}

/// Screen regions of the form, shared by rendering and mouse handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloneFormLayout {
    pub outer: Rect,
    pub url: Rect,
    pub target: Rect,
    pub browse_button: Rect,
    pub clone_button: Rect,
    pub cancel_button: Rect,
}

impl CloneFormLayout {
    pub fn new(area: Rect) -> Self {
        let outer = fixed_centered(64, 10, area);
        let inner = Block::default().borders(Borders::ALL).inner(outer);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);
        let target_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(10)])
            .split(rows[1]);
        let button_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(10),
                Constraint::Length(1),
                Constraint::Length(10),
            ])
            .split(rows[3]);
        Self {
            outer,
            url: rows[0],
            target: target_row[0],
            browse_button: target_row[1],
            clone_button: button_row[1],
            cancel_button: button_row[3],
        }
    }
}

pub fn render_clone_form(f: &mut Frame, form: &CloneForm, theme: &Theme) {
    let layout = CloneFormLayout::new(f.area());
    f.render_widget(Clear, layout.outer);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(
                " Clone Repository ",
                Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
            )),
        layout.outer,
    );

    let url_focused = form.focus == CloneField::Url;
    let url_text = if form.url.is_empty() && !url_focused {
        Span::styled("Repository URL", Style::default().fg(theme.text_dim))
    } else {
        Span::styled(
            format!("{}{}", form.url, if url_focused { "_" } else { "" }),
            Style::default().fg(theme.text),
        )
    };
    f.render_widget(
        Paragraph::new(Line::from(url_text)).block(
            Block::default().borders(Borders::ALL).border_style(Style::default().fg(
                if url_focused {
                    theme.accent
                } else {
                    theme.border
                },
            )),
        ),
        layout.url,
    );

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Target: ", Style::default().fg(theme.text_dim)),
            Span::styled(form.target.display().to_string(), Style::default().fg(theme.text)),
        ])),
        layout.target,
    );

    render_button(
        f,
        layout.browse_button,
        "Browse",
        form.focus == CloneField::Browse,
        theme,
    );
    render_button(
        f,
        layout.clone_button,
        "Clone",
        form.focus == CloneField::Clone,
        theme,
    );
    render_button(
        f,
        layout.cancel_button,
        "Cancel",
        form.focus == CloneField::Cancel,
        theme,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut field = CloneField::Url;
        for expected in [
            CloneField::Browse,
            CloneField::Clone,
            CloneField::Cancel,
            CloneField::Url,
        ] {
            field = field.next();
            assert_eq!(field, expected);
        }
        assert_eq!(CloneField::Url.previous(), CloneField::Cancel);
    }

    #[test]
    fn test_new_form_targets_default_dir() {
        let form = CloneForm::new(PathBuf::from("/home/me"));
        assert_eq!(form.target, PathBuf::from("/home/me"));
        assert!(form.url.is_empty());
        assert_eq!(form.focus, CloneField::Url);
    }
}
