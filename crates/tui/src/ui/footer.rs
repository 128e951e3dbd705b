//! Footer bar listing the visible key bindings.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use thalia_config::Theme;

use crate::input::FooterHint;

/// Spans for a row of hints: ` key description ` pairs.
pub fn hint_spans<'a>(hints: &'a [FooterHint], theme: &Theme) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for hint in hints {
        spans.push(Span::styled(
            format!(" {} ", hint.key),
            Style::default()
                .fg(theme.highlight_fg)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {} ", hint.description),
            Style::default().fg(theme.text),
        ));
        spans.push(Span::raw(" "));
    }
    spans
}

pub fn render_footer(f: &mut Frame, area: Rect, hints: &[FooterHint], theme: &Theme) {
    f.render_widget(Paragraph::new(Line::from(hint_spans(hints, theme))), area);
}
