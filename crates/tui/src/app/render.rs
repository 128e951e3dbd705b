//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the main app layout (content, footer)
//! - Dispatch to screen-specific renderers
//! - Draw modals and toasts over the screen
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state (except for ListState selection and `last_area`)

use ratatui::Frame;

use crate::app::App;
use crate::app::state::{Screen, split_footer};
use crate::input::FooterHint;
use crate::ui::footer::render_footer;
use crate::ui::popup::{Modal, render_modal};
use crate::ui::screens::{DashboardView, render_dashboard, render_workspace};
use crate::ui::toast::render_toasts;

fn hint(key: &str, description: &'static str) -> FooterHint {
    FooterHint {
        key: key.to_string(),
        description,
    }
}

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        self.last_area = f.area();
        let (content, footer) = split_footer(f.area());
        let theme = self.theme;

        match self.screens.last() {
            Some(Screen::Workspace(workspace)) => {
                render_workspace(f, content, &workspace.repo, workspace.focus, &theme);
            }
            Some(Screen::Dashboard) | None => render_dashboard(
                f,
                content,
                DashboardView {
                    banner: &self.banner,
                    banner_style: self.banner_style,
                    recent: &self.dashboard.recent,
                    list_state: &mut self.dashboard.list_state,
                },
                &theme,
            ),
        }

        for modal in &mut self.modals {
            render_modal(f, modal, &theme);
        }

        render_footer(f, footer, &self.footer_hints(), &theme);
        render_toasts(f, &self.toasts, &theme);
    }

    /// Hints for the footer: the top modal's keys, or the screen's bindings
    /// followed by the global ones.
    pub fn footer_hints(&self) -> Vec<FooterHint> {
        if let Some(modal) = self.modals.last() {
            return match modal {
                Modal::DirPicker(_) => vec![
                    hint("enter", "Open folder"),
                    hint("s", "Select"),
                    hint("tab", "Type a path"),
                    hint("esc", "Cancel"),
                ],
                Modal::CloneForm(_) => vec![
                    hint("tab", "Next field"),
                    hint("enter", "Activate"),
                    hint("esc", "Cancel"),
                ],
                Modal::CloneProgress(_) => vec![hint("esc", "Cancel clone")],
            };
        }

        let mut hints = match self.screens.last() {
            Some(Screen::Workspace(_)) => {
                let mut hints = self.keymaps.workspace.hints();
                hints.push(hint("tab", "Next panel"));
                hints
            }
            Some(Screen::Dashboard) | None => self.keymaps.dashboard.hints(),
        };
        hints.extend(self.keymaps.global.hints());
        hints
    }
}
