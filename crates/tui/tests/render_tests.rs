//! Rendering tests against ratatui's `TestBackend`.
//!
//! These assert on visible text rather than exact cell styling.

mod helpers;

use helpers::*;
use tempfile::TempDir;
use thalia_tui::action::{Action, RepoIntent};
use thalia_tui::git::RepoSummary;

#[test]
fn test_dashboard_renders_banner_buttons_and_recent_list() {
    let home = TempDir::new().unwrap();
    let mut app = app_with_home(home.path());
    let screen = render_to_string(&mut app, 100, 30);

    assert!(screen.contains("Recent Repositories"));
    assert!(screen.contains("No recent repositories"));
    for label in ["Open", "Clone", "Create"] {
        assert!(screen.contains(label), "missing button {label}");
    }
    assert!(screen.contains("Open Repository"), "footer hint missing");
    assert!(screen.contains("Quit the app"));
}

#[test]
fn test_recent_entries_show_directory_names() {
    let home = TempDir::new().unwrap();
    let repo = init_repo_with_commit(&home.path().join("my-project"));
    let mut app = app_with_home(home.path());
    app.cache.record_opened(&repo).unwrap();
    app.refresh_recent();

    let screen = render_to_string(&mut app, 100, 30);
    assert!(screen.contains("my-project"));
    assert!(!screen.contains("No recent repositories"));
}

#[test]
fn test_render_records_last_area() {
    let home = TempDir::new().unwrap();
    let mut app = app_with_home(home.path());
    render_to_string(&mut app, 80, 24);
    assert_eq!(app.last_area.width, 80);
    assert_eq!(app.last_area.height, 24);
}

#[test]
fn test_workspace_renders_panels() {
    let home = TempDir::new().unwrap();
    let path = init_repo_with_commit(&home.path().join("repo"));
    let mut app = app_with_home(home.path());
    app.update(Action::RepositoryLoaded {
        intent: RepoIntent::Open,
        result: Ok(RepoSummary {
            path,
            name: "repo".to_string(),
            head: Some("main".to_string()),
            is_bare: false,
        }),
    });

    let screen = render_to_string(&mut app, 120, 30);
    for title in [
        "Branches",
        "Stashes",
        "File View",
        "Workspace Files",
        "Commit History",
    ] {
        assert!(screen.contains(title), "missing panel {title}");
    }
    assert!(screen.contains("* main"));
}

#[test]
fn test_modals_render_over_dashboard() {
    let home = TempDir::new().unwrap();
    let mut app = app_with_home(home.path());

    app.handle_input(key('o'));
    let screen = render_to_string(&mut app, 100, 30);
    assert!(screen.contains("Select Directory for Repository"));
    assert!(screen.contains("[ Select ]"));

    app.handle_input(esc_key());
    app.handle_input(key('c'));
    let screen = render_to_string(&mut app, 100, 30);
    assert!(screen.contains("Clone Repository"));
    assert!(screen.contains("Target:"));
}

#[test]
fn test_toasts_render() {
    let home = TempDir::new().unwrap();
    let mut app = app_with_home(home.path());
    app.handle_input(key('o'));
    app.handle_input(esc_key());

    let screen = render_to_string(&mut app, 100, 30);
    assert!(screen.contains("No directory selected"));
}
