//! Directory picker modal.
//!
//! Lists the subdirectories of the current location and offers a path input.
//! Confirming an empty input selects the current location; a relative input
//! is resolved against it.

use std::path::{Component, Path, PathBuf};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use thalia_config::Theme;

use super::{fixed_centered, render_button};

/// What the picked directory will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerPurpose {
    Open,
    Create,
    CloneTarget,
}

impl PickerPurpose {
    pub fn title(self) -> &'static str {
        match self {
            Self::Open | Self::Create => "Select Directory for Repository",
            Self::CloneTarget => "Select Target Directory for Clone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerFocus {
    List,
    Input,
}

/// One row of the directory list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEntry {
    pub label: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct DirPicker {
    pub purpose: PickerPurpose,
    pub location: PathBuf,
    pub entries: Vec<PickerEntry>,
    pub list_state: ListState,
    pub input: String,
    pub focus: PickerFocus,
}

impl DirPicker {
    pub fn new(purpose: PickerPurpose, location: PathBuf) -> Self {
        let mut picker = Self {
            purpose,
            location,
            entries: Vec::new(),
            list_state: ListState::default(),
            input: String::new(),
            focus: PickerFocus::List,
        };
        picker.load_entries();
        picker
    }

    fn load_entries(&mut self) {
        let mut dirs: Vec<PickerEntry> = match std::fs::read_dir(&self.location) {
            Ok(read) => read
                .filter_map(Result::ok)
                .map(|entry| entry.path())
                .filter(|path| path.is_dir())
                .filter_map(|path| {
                    let label = path.file_name()?.to_string_lossy().into_owned();
                    (!label.starts_with('.')).then_some(PickerEntry { label, path })
                })
                .collect(),
            Err(e) => {
                tracing::debug!(location = %self.location.display(), error = %e, "Cannot list directory");
                Vec::new()
            }
        };
        dirs.sort_by_key(|e| e.label.to_lowercase());

        self.entries.clear();
        if let Some(parent) = self.location.parent() {
            self.entries.push(PickerEntry {
                label: "..".to_string(),
                path: parent.to_path_buf(),
            });
        }
        self.entries.extend(dirs);
        self.list_state =
            ListState::default().with_selected((!self.entries.is_empty()).then_some(0));
    }

    /// Change the listed directory.
    pub fn navigate_to(&mut self, location: PathBuf) {
        self.location = location;
        self.load_entries();
    }

    pub fn enter_selected(&mut self) {
        if let Some(entry) = self
            .list_state
            .selected()
            .and_then(|i| self.entries.get(i))
            .cloned()
        {
            self.navigate_to(entry.path);
        }
    }

    pub fn go_up(&mut self) {
        if let Some(parent) = self.location.parent().map(Path::to_path_buf) {
            self.navigate_to(parent);
        }
    }

    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let next = self
            .list_state
            .selected()
            .map_or(0, |i| (i + 1).min(self.entries.len() - 1));
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let prev = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(prev));
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PickerFocus::List => PickerFocus::Input,
            PickerFocus::Input => PickerFocus::List,
        };
    }

    /// The directory the current input designates.
    pub fn resolve_input(&self) -> PathBuf {
        let input = self.input.trim();
        if input.is_empty() {
            return self.location.clone();
        }
        let path = Path::new(input);
        if path.is_absolute() {
            normalize(path)
        } else {
            normalize(&self.location.join(path))
        }
    }
}

/// Lexically resolve `.` and `..` components.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Screen regions of the picker, shared by rendering and mouse handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirPickerLayout {
    pub outer: Rect,
    pub location: Rect,
    pub list: Rect,
    pub input: Rect,
    pub select_button: Rect,
    pub cancel_button: Rect,
}

impl DirPickerLayout {
    pub fn new(area: Rect) -> Self {
        let outer = fixed_centered(72, 22, area);
        let inner = Block::default().borders(Borders::ALL).inner(outer);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(inner);
        let buttons = Layout::default()
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
            location: rows[0],
            list: rows[1],
            input: rows[2],
            select_button: buttons[1],
            cancel_button: buttons[3],
        }
    }

    /// Index of the list entry drawn at `row`, given the list scroll offset.
    pub fn entry_at(&self, row: u16, offset: usize, len: usize) -> Option<usize> {
        let top = self.list.y + 1;
        let bottom = self.list.y + self.list.height.saturating_sub(1);
        if row < top || row >= bottom {
            return None;
        }
        let index = offset + usize::from(row - top);
        (index < len).then_some(index)
    }
}

pub fn render_dir_picker(f: &mut Frame, picker: &mut DirPicker, theme: &Theme) {
    let layout = DirPickerLayout::new(f.area());
    f.render_widget(Clear, layout.outer);
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(Span::styled(
                format!(" {} ", picker.purpose.title()),
                Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
            )),
        layout.outer,
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            picker.location.display().to_string(),
            Style::default().fg(theme.accent),
        ))),
        layout.location,
    );

    let focus_color = |focused: bool| if focused { theme.accent } else { theme.border };

    let items: Vec<ListItem> = picker
        .entries
        .iter()
        .map(|e| ListItem::new(format!("{}/", e.label)))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(focus_color(picker.focus == PickerFocus::List))),
        )
        .style(Style::default().fg(theme.text))
        .highlight_style(
            Style::default()
                .fg(theme.highlight_fg)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );
    f.render_stateful_widget(list, layout.list, &mut picker.list_state);

    let input_focused = picker.focus == PickerFocus::Input;
    let input_text = if picker.input.is_empty() && !input_focused {
        Span::styled("(current directory)", Style::default().fg(theme.text_dim))
    } else {
        Span::styled(
            format!("{}{}", picker.input, if input_focused { "_" } else { "" }),
            Style::default().fg(theme.text),
        )
    };
    f.render_widget(
        Paragraph::new(Line::from(input_text)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(focus_color(input_focused)))
                .title(" Path "),
        ),
        layout.input,
    );

    render_button(f, layout.select_button, "Select", false, theme);
    render_button(f, layout.cancel_button, "Cancel", false, theme);
}
