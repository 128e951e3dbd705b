//! Mouse event handling for the TUI app.
//!
//! Responsibilities:
//! - Handle mouse scroll events
//! - Handle dashboard button and recent list clicks
//! - Handle modal interactions (buttons, list rows, input fields)
//! - Focus workspace panels on click
//!
//! Does NOT handle:
//! - Does NOT handle keyboard input
//! - Does NOT render the UI
//!
//! Hit-testing uses the same layout structs as rendering, computed from
//! `last_area`.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::action::Action;
use crate::app::App;
use crate::app::state::{CurrentScreen, split_footer};
use crate::ui::popup::{
    CloneField, CloneFormLayout, CloneProgressLayout, DirPickerLayout, Modal, PickerFocus,
};
use crate::ui::screens::dashboard::contains;
use crate::ui::screens::{DashboardLayout, WorkspaceLayout};

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        // Route to modal handler when a modal is open
        if self.has_modal() {
            return self.handle_modal_mouse(mouse);
        }
        match self.current_screen() {
            CurrentScreen::Dashboard => self.handle_dashboard_mouse(mouse),
            CurrentScreen::Workspace => {
                self.handle_workspace_mouse(mouse);
                None
            }
        }
    }

    fn handle_dashboard_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.dashboard.select_previous(),
            MouseEventKind::ScrollDown => self.dashboard.select_next(),
            MouseEventKind::Down(MouseButton::Left) => {
                let (content, _) = split_footer(self.last_area);
                let layout = DashboardLayout::new(content, self.banner.lines().count() as u16);
                if let Some(command) = layout.button_at(mouse.column, mouse.row) {
                    return self.run_dashboard_command(command);
                }
                if let Some(index) = layout.recent_at(
                    mouse.column,
                    mouse.row,
                    self.dashboard.list_state.offset(),
                    self.dashboard.recent.len(),
                ) {
                    self.dashboard.list_state.select(Some(index));
                    return self
                        .dashboard
                        .selected_path()
                        .cloned()
                        .map(Action::OpenRepository);
                }
            }
            _ => {}
        }
        None
    }

    fn handle_workspace_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (content, _) = split_footer(self.last_area);
        let layout = WorkspaceLayout::new(content);
        if let Some(panel) = layout.panel_at(mouse.column, mouse.row)
            && let Some(workspace) = self.workspace_mut()
        {
            workspace.focus = panel;
        }
    }

    fn handle_modal_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        match self.modals.last()? {
            Modal::DirPicker(_) => self.handle_picker_mouse(mouse),
            Modal::CloneForm(_) => self.handle_clone_form_mouse(mouse),
            Modal::CloneProgress(view) => {
                let layout = CloneProgressLayout::new(self.last_area);
                if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                    && contains(layout.cancel_button, mouse.column, mouse.row)
                {
                    tracing::info!(url = %view.url, "Cancelling clone");
                    view.cancel.cancel();
                }
                None
            }
        }
    }

    fn handle_picker_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        let layout = DirPickerLayout::new(self.last_area);
        let Some(Modal::DirPicker(picker)) = self.modals.last_mut() else {
            return None;
        };
        match mouse.kind {
            MouseEventKind::ScrollUp => picker.select_previous(),
            MouseEventKind::ScrollDown => picker.select_next(),
            MouseEventKind::Down(MouseButton::Left) => {
                if contains(layout.select_button, mouse.column, mouse.row) {
                    return self.confirm_picker();
                }
                if contains(layout.cancel_button, mouse.column, mouse.row) {
                    return self.cancel_picker();
                }
                if contains(layout.input, mouse.column, mouse.row) {
                    picker.focus = PickerFocus::Input;
                } else if contains(layout.list, mouse.column, mouse.row) {
                    picker.focus = PickerFocus::List;
                    if let Some(index) =
                        layout.entry_at(mouse.row, picker.list_state.offset(), picker.entries.len())
                    {
                        // A click on the highlighted row descends into it.
                        if picker.list_state.selected() == Some(index) {
                            picker.enter_selected();
                        } else {
                            picker.list_state.select(Some(index));
                        }
                    }
                }
            }
            _ => {}
        }
        None
    }

    fn handle_clone_form_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let layout = CloneFormLayout::new(self.last_area);
        let (column, row) = (mouse.column, mouse.row);
        if contains(layout.browse_button, column, row) {
            self.browse_clone_target();
            return None;
        }
        if contains(layout.clone_button, column, row) {
            return self.confirm_clone_form();
        }
        if contains(layout.cancel_button, column, row) {
            return self.cancel_clone_form();
        }
        if contains(layout.url, column, row)
            && let Some(Modal::CloneForm(form)) = self.modals.last_mut()
        {
            form.focus = CloneField::Url;
        }
        None
    }
}
