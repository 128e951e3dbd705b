//! Tests for mouse handling on the dashboard and in modals.
//!
//! Clicks are computed from the same layout structs the renderers use, so
//! these tests double as a check that hit-testing matches what is drawn.

mod helpers;

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use helpers::*;
use tempfile::TempDir;
use thalia_tui::action::Action;
use thalia_tui::app::split_footer;
use thalia_tui::ui::popup::{CloneFormLayout, DirPickerLayout, Modal, PickerPurpose};
use thalia_tui::ui::screens::DashboardLayout;

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn dashboard_layout(app: &thalia_tui::App) -> DashboardLayout {
    let (content, _) = split_footer(app.last_area);
    DashboardLayout::new(content, app.banner.lines().count() as u16)
}

#[test]
fn test_dashboard_buttons_open_modals() {
    let home = TempDir::new().unwrap();
    let mut app = app_with_home(home.path());
    let layout = dashboard_layout(&app);

    let create = layout.buttons[2];
    assert!(app.handle_mouse(click(create.x + 1, create.y + 1)).is_none());
    assert!(matches!(
        app.modals.last(),
        Some(Modal::DirPicker(p)) if p.purpose == PickerPurpose::Create
    ));

    let picker = DirPickerLayout::new(app.last_area);
    let cancel = picker.cancel_button;
    app.handle_mouse(click(cancel.x + 1, cancel.y));
    assert!(app.modals.is_empty());

    let clone = layout.buttons[1];
    app.handle_mouse(click(clone.x + 1, clone.y + 1));
    assert!(matches!(app.modals.last(), Some(Modal::CloneForm(_))));
}

#[test]
fn test_picker_select_button_confirms() {
    let home = TempDir::new().unwrap();
    let mut app = app_with_home(home.path());
    let open = dashboard_layout(&app).buttons[0];
    app.handle_mouse(click(open.x + 1, open.y + 1));

    let select = DirPickerLayout::new(app.last_area).select_button;
    match app.handle_mouse(click(select.x + 1, select.y)) {
        Some(Action::OpenRepository(path)) => assert_eq!(path, home.path()),
        other => panic!("expected OpenRepository, got {other:?}"),
    }
}

#[test]
fn test_clone_form_cancel_button() {
    let home = TempDir::new().unwrap();
    let mut app = app_with_home(home.path());
    app.handle_input(key('c'));

    let cancel = CloneFormLayout::new(app.last_area).cancel_button;
    assert!(app.handle_mouse(click(cancel.x + 1, cancel.y)).is_none());
    assert!(app.modals.is_empty());
    assert_eq!(
        app.toasts.last().unwrap().message,
        "Clone operation cancelled."
    );
}

#[test]
fn test_recent_row_click_opens_repository() {
    let home = TempDir::new().unwrap();
    let repo = init_repo_with_commit(&home.path().join("repo"));
    let mut app = app_with_home(home.path());
    app.cache.record_opened(&repo).unwrap();
    app.refresh_recent();

    let recent = dashboard_layout(&app).recent;
    match app.handle_mouse(click(recent.x + 2, recent.y + 1)) {
        Some(Action::OpenRepository(path)) => assert_eq!(path, repo),
        other => panic!("expected OpenRepository, got {other:?}"),
    }
}
