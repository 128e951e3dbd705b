//! Modal dialogs drawn over the active screen.
//!
//! Modals stack: the directory picker can open on top of the clone form.
//! Only the top modal receives input.

mod clone_form;
mod clone_progress;
mod dir_picker;

pub use clone_form::{CloneField, CloneForm, CloneFormLayout, render_clone_form};
pub use clone_progress::{CloneProgressLayout, CloneProgressView, render_clone_progress};
pub use dir_picker::{
    DirPicker, DirPickerLayout, PickerEntry, PickerFocus, PickerPurpose, normalize,
    render_dir_picker,
};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::Paragraph,
};
use thalia_config::Theme;

#[derive(Debug, Clone)]
pub enum Modal {
    DirPicker(DirPicker),
    CloneForm(CloneForm),
    CloneProgress(CloneProgressView),
}

pub fn render_modal(f: &mut Frame, modal: &mut Modal, theme: &Theme) {
    match modal {
        Modal::DirPicker(picker) => render_dir_picker(f, picker, theme),
        Modal::CloneForm(form) => render_clone_form(f, form, theme),
        Modal::CloneProgress(view) => render_clone_progress(f, view, theme),
    }
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
pub fn fixed_centered(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// One-line button, e.g. `[ Clone ]`.
pub fn render_button(f: &mut Frame, area: Rect, label: &str, focused: bool, theme: &Theme) {
    let style = if focused {
        Style::default()
            .fg(theme.highlight_fg)
            .bg(theme.highlight_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    f.render_widget(
        Paragraph::new(Span::styled(format!("[ {label} ]"), style)).alignment(Alignment::Center),
        area,
    );
}
