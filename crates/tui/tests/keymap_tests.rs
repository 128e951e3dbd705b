//! Keymap tests built from the settings tree.
//!
//! Test coverage:
//! - Default bindings resolve to the expected actions per context.
//! - User bindings from a settings file replace a context's defaults.
//! - Rebinding changes what the app does with a key.

mod helpers;

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use helpers::*;
use tempfile::TempDir;
use thalia_config::Settings;
use thalia_tui::App;
use thalia_tui::action::Action;
use thalia_tui::cache::RecentRepoCache;
use thalia_tui::git::Git2Backend;
use thalia_tui::input::{FooterHint, Keymaps};
use thalia_tui::ui::popup::{Modal, PickerPurpose};

fn settings_from(toml_text: &str) -> Settings {
    toml::from_str(toml_text).unwrap()
}

#[test]
fn test_default_keymaps_resolve() {
    let keymaps = Keymaps::from_settings(&Settings::default()).unwrap();

    assert_eq!(keymaps.global.resolve(key('q')), Some("quit"));
    assert_eq!(keymaps.global.resolve(ctrl_key('c')), Some("quit"));
    assert_eq!(keymaps.dashboard.resolve(key('o')), Some("open_repo"));
    assert_eq!(keymaps.dashboard.resolve(key('c')), Some("clone_repo"));
    assert_eq!(keymaps.dashboard.resolve(key('n')), Some("create_repo"));
    assert_eq!(keymaps.workspace.resolve(key('o')), Some("open_file"));
    assert_eq!(keymaps.workspace.resolve(key('b')), Some("branch_manager"));
    assert_eq!(keymaps.dashboard.resolve(key('x')), None);
}

#[test]
fn test_default_hints_only_show_visible_bindings() {
    let keymaps = Keymaps::from_settings(&Settings::default()).unwrap();

    let dashboard: Vec<_> = keymaps
        .dashboard
        .hints()
        .into_iter()
        .map(|h| h.description)
        .collect();
    assert_eq!(
        dashboard,
        vec!["Open Repository", "Clone Repository", "Create Repository"]
    );
    assert!(keymaps.workspace.hints().is_empty());
    assert_eq!(
        keymaps.global.hints(),
        vec![FooterHint {
            key: "q".to_string(),
            description: "Quit the app",
        }]
    );
}

#[test]
fn test_user_bindings_replace_context_defaults() {
    let settings = settings_from(
        r#"
[dashboard.bindings]
bindings = [{ key = ["x", "f5"], action = "open_repo" }]
"#,
    );
    let keymaps = Keymaps::from_settings(&settings).unwrap();

    assert_eq!(keymaps.dashboard.resolve(key('x')), Some("open_repo"));
    assert_eq!(
        keymaps
            .dashboard
            .resolve(KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE)),
        Some("open_repo")
    );
    assert_eq!(keymaps.dashboard.resolve(key('o')), None);
    // Other contexts keep their defaults
    assert_eq!(keymaps.global.resolve(key('q')), Some("quit"));
}

#[test]
fn test_invalid_key_fails_keymap_build() {
    let settings = settings_from(
        r#"
[bindings]
bindings = [{ key = "hyper+q", action = "quit" }]
"#,
    );
    assert!(Keymaps::from_settings(&settings).is_err());
}

#[test]
fn test_rebound_key_drives_app() {
    let settings = settings_from(
        r#"
[bindings]
bindings = [{ key = "escape", action = "quit" }]

[dashboard.bindings]
bindings = [{ key = "question_mark", action = "create_repo" }]
"#,
    );
    let keymaps = Keymaps::from_settings(&settings).unwrap();
    let home = TempDir::new().unwrap();
    let mut app = App::new(
        &settings,
        keymaps,
        RecentRepoCache::open_in_memory().unwrap(),
        Arc::new(Git2Backend::new()),
        home.path().to_path_buf(),
    );

    assert!(app.handle_input(key('q')).is_none());
    assert!(app.handle_input(key('?')).is_none());
    assert!(matches!(
        app.modals.last(),
        Some(Modal::DirPicker(p)) if p.purpose == PickerPurpose::Create
    ));

    // Esc closes the modal before it can quit
    app.handle_input(esc_key());
    assert!(app.modals.is_empty());
    assert!(matches!(app.handle_input(esc_key()), Some(Action::Quit)));
}
