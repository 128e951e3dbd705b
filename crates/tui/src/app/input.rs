//! Keyboard handling for screens and modals.
//!
//! Responsibilities:
//! - Route keys to the topmost modal, else the screen keymap, else the
//!   global keymap
//! - Drive the directory picker and clone form flows
//!
//! Does NOT handle:
//! - Does NOT run git operations (returns trigger actions instead)
//! - Does NOT handle mouse input (see mouse.rs)

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use thalia_config::bindings::WORKSPACE_ACTIONS;
use tokio_util::sync::CancellationToken;

use crate::action::Action;
use crate::app::App;
use crate::app::state::CurrentScreen;
use crate::git::{is_valid_clone_target, resolve_clone_target};
use crate::input::{DashboardCommand, GlobalCommand, WorkspaceCommand};
use crate::ui::ToastLevel;
use crate::ui::popup::{
    CloneField, CloneForm, CloneProgressView, DirPicker, Modal, PickerFocus, PickerPurpose,
};

impl App {
    /// Handle a key press - returns an Action if one should be dispatched.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if self.has_modal() {
            // Control chords still reach global bindings so ctrl+c quits from a modal.
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && let Some(action) = self.global_action(key)
            {
                return Some(action);
            }
            return self.handle_modal_key(key);
        }

        match self.current_screen() {
            CurrentScreen::Dashboard => {
                if let Some(command) = self
                    .keymaps
                    .dashboard
                    .resolve(key)
                    .and_then(|name| name.parse::<DashboardCommand>().ok())
                {
                    return self.run_dashboard_command(command);
                }
            }
            CurrentScreen::Workspace => {
                if let Some(command) = self
                    .keymaps
                    .workspace
                    .resolve(key)
                    .and_then(|name| name.parse::<WorkspaceCommand>().ok())
                {
                    self.run_workspace_command(command);
                    return None;
                }
            }
        }

        if let Some(action) = self.global_action(key) {
            return Some(action);
        }

        match self.current_screen() {
            CurrentScreen::Dashboard => self.handle_dashboard_navigation(key),
            CurrentScreen::Workspace => {
                self.handle_workspace_navigation(key);
                None
            }
        }
    }

    fn global_action(&self, key: KeyEvent) -> Option<Action> {
        let command = self
            .keymaps
            .global
            .resolve(key)
            .and_then(|name| name.parse::<GlobalCommand>().ok())?;
        match command {
            GlobalCommand::Quit => Some(Action::Quit),
        }
    }

    fn handle_dashboard_navigation(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.dashboard.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.dashboard.select_previous(),
            KeyCode::Enter => {
                return self
                    .dashboard
                    .selected_path()
                    .cloned()
                    .map(Action::OpenRepository);
            }
            _ => {}
        }
        None
    }

    fn handle_workspace_navigation(&mut self, key: KeyEvent) {
        let Some(workspace) = self.workspace_mut() else {
            return;
        };
        match key.code {
            KeyCode::Tab => workspace.focus = workspace.focus.next(),
            KeyCode::BackTab => workspace.focus = workspace.focus.previous(),
            _ => {}
        }
    }

    pub(crate) fn run_dashboard_command(&mut self, command: DashboardCommand) -> Option<Action> {
        tracing::debug!(%command, "Dashboard command");
        match command {
            DashboardCommand::OpenRepo => self.open_picker(PickerPurpose::Open),
            DashboardCommand::CreateRepo => self.open_picker(PickerPurpose::Create),
            DashboardCommand::CloneRepo => {
                self.modals
                    .push(Modal::CloneForm(CloneForm::new(self.home_dir.clone())));
            }
        }
        None
    }

    fn run_workspace_command(&mut self, command: WorkspaceCommand) {
        let description = WORKSPACE_ACTIONS
            .describe(command.name())
            .unwrap_or(command.name());
        self.notify(
            ToastLevel::Info,
            None,
            format!("Placeholder: {description}"),
        );
    }

    fn open_picker(&mut self, purpose: PickerPurpose) {
        self.modals.push(Modal::DirPicker(DirPicker::new(
            purpose,
            self.start_dir.clone(),
        )));
    }

    fn handle_modal_key(&mut self, key: KeyEvent) -> Option<Action> {
        match self.modals.last()? {
            Modal::DirPicker(_) => self.handle_picker_key(key),
            Modal::CloneForm(_) => self.handle_clone_form_key(key),
            Modal::CloneProgress(view) => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                    tracing::info!(url = %view.url, "Cancelling clone");
                    view.cancel.cancel();
                }
                None
            }
        }
    }

    fn handle_picker_key(&mut self, key: KeyEvent) -> Option<Action> {
        let Some(Modal::DirPicker(picker)) = self.modals.last_mut() else {
            return None;
        };
        match (picker.focus, key.code) {
            (_, KeyCode::Esc) => return self.cancel_picker(),
            (_, KeyCode::Tab | KeyCode::BackTab) => picker.toggle_focus(),
            (PickerFocus::List, KeyCode::Down | KeyCode::Char('j')) => picker.select_next(),
            (PickerFocus::List, KeyCode::Up | KeyCode::Char('k')) => picker.select_previous(),
            (PickerFocus::List, KeyCode::Right | KeyCode::Char('l')) => picker.enter_selected(),
            (PickerFocus::List, KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace) => {
                picker.go_up();
            }
            (PickerFocus::List, KeyCode::Enter) => picker.enter_selected(),
            (PickerFocus::List, KeyCode::Char('s')) => return self.confirm_picker(),
            (PickerFocus::Input, KeyCode::Enter) => return self.confirm_picker(),
            (PickerFocus::Input, KeyCode::Backspace) => {
                picker.input.pop();
            }
            (PickerFocus::Input, KeyCode::Char(c))
                if !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                picker.input.push(c);
            }
            _ => {}
        }
        None
    }

    /// Close the picker and act on the chosen directory.
    pub(crate) fn confirm_picker(&mut self) -> Option<Action> {
        if !matches!(self.modals.last(), Some(Modal::DirPicker(_))) {
            return None;
        }
        let Some(Modal::DirPicker(picker)) = self.modals.pop() else {
            return None;
        };
        let path = picker.resolve_input();
        tracing::debug!(purpose = ?picker.purpose, path = %path.display(), "Directory selected");
        match picker.purpose {
            PickerPurpose::Open => Some(Action::OpenRepository(path)),
            PickerPurpose::Create => Some(Action::CreateRepository(path)),
            PickerPurpose::CloneTarget => {
                self.apply_clone_target(path);
                None
            }
        }
    }

    /// Close the picker without a selection.
    pub(crate) fn cancel_picker(&mut self) -> Option<Action> {
        if !matches!(self.modals.last(), Some(Modal::DirPicker(_))) {
            return None;
        }
        let Some(Modal::DirPicker(picker)) = self.modals.pop() else {
            return None;
        };
        match picker.purpose {
            PickerPurpose::Open | PickerPurpose::Create => {
                self.notify(ToastLevel::Info, None, "No directory selected, exiting.");
            }
            PickerPurpose::CloneTarget => {
                if let Some(Modal::CloneForm(form)) = self.modals.last_mut() {
                    form.target = form.default_dir.clone();
                }
                self.notify(
                    ToastLevel::Info,
                    None,
                    "No directory selected, using default directory.",
                );
            }
        }
        None
    }

    fn apply_clone_target(&mut self, picked: PathBuf) {
        let Some(Modal::CloneForm(form)) = self.modals.last_mut() else {
            return;
        };
        let (target, warning) = resolve_clone_target(&picked, &form.url, &form.default_dir);
        form.target = target;
        if let Some(warning) = warning {
            self.notify(ToastLevel::Warning, Some("Directory already exists"), warning);
        }
    }

    fn handle_clone_form_key(&mut self, key: KeyEvent) -> Option<Action> {
        let Some(Modal::CloneForm(form)) = self.modals.last_mut() else {
            return None;
        };
        match (form.focus, key.code) {
            (_, KeyCode::Esc) => return self.cancel_clone_form(),
            (_, KeyCode::Tab) => form.focus = form.focus.next(),
            (_, KeyCode::BackTab) => form.focus = form.focus.previous(),
            (CloneField::Url, KeyCode::Enter) => return self.confirm_clone_form(),
            (CloneField::Url, KeyCode::Backspace) => {
                form.url.pop();
            }
            (CloneField::Url, KeyCode::Char(c))
                if !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                form.url.push(c);
            }
            (CloneField::Browse, KeyCode::Enter) => self.browse_clone_target(),
            (CloneField::Clone, KeyCode::Enter) => return self.confirm_clone_form(),
            (CloneField::Cancel, KeyCode::Enter) => return self.cancel_clone_form(),
            _ => {}
        }
        None
    }

    /// Open a picker for the clone target on top of the form.
    pub(crate) fn browse_clone_target(&mut self) {
        let start = match self.modals.last() {
            Some(Modal::CloneForm(form)) if form.target.is_dir() => form.target.clone(),
            _ => self.start_dir.clone(),
        };
        self.modals.push(Modal::DirPicker(DirPicker::new(
            PickerPurpose::CloneTarget,
            start,
        )));
    }

    pub(crate) fn cancel_clone_form(&mut self) -> Option<Action> {
        if let Some(Modal::CloneForm(_)) = self.modals.last() {
            self.modals.pop();
            self.notify(ToastLevel::Info, None, "Clone operation cancelled.");
        }
        None
    }

    /// Validate the form and start the clone.
    ///
    /// On success the form is replaced by the progress modal.
    pub(crate) fn confirm_clone_form(&mut self) -> Option<Action> {
        let Some(Modal::CloneForm(form)) = self.modals.last() else {
            return None;
        };
        let url = form.url.trim().to_string();
        let target = form.target.clone();

        if url.is_empty() || target.as_os_str().is_empty() {
            self.notify(
                ToastLevel::Warning,
                Some("Missing info"),
                "Please provide both URL and target directory.",
            );
            return None;
        }
        if !is_valid_clone_target(&target) {
            self.notify(
                ToastLevel::Warning,
                Some("Invalid Directory"),
                format!(
                    "The directory {} is not valid for cloning. Please choose an empty directory.",
                    target.display()
                ),
            );
            return None;
        }

        self.modals.pop();
        let cancel = CancellationToken::new();
        let view = CloneProgressView::new(url.clone(), target.clone(), cancel.clone());
        self.notify(ToastLevel::Info, None, view.title());
        self.modals.push(Modal::CloneProgress(view));
        Some(Action::StartClone {
            url,
            target,
            cancel,
        })
    }
}
