//! Test helpers for TUI testing.
//!
//! Provides key event constructors, an app built on an in-memory cache, and
//! scratch git repositories.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use thalia_config::Settings;
use thalia_tui::app::App;
use thalia_tui::cache::RecentRepoCache;
use thalia_tui::git::Git2Backend;
use thalia_tui::input::Keymaps;

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create a ctrl+character key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn enter_key() -> KeyEvent {
    code(KeyCode::Enter)
}

pub fn esc_key() -> KeyEvent {
    code(KeyCode::Esc)
}

pub fn tab_key() -> KeyEvent {
    code(KeyCode::Tab)
}

/// Type a string one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        assert!(app.handle_input(key(c)).is_none());
    }
}

/// App with default settings, an in-memory cache and `home` as clone default.
pub fn app_with_home(home: &Path) -> App {
    let settings = Settings::default();
    let keymaps = Keymaps::from_settings(&settings).expect("default keymaps");
    let cache = RecentRepoCache::open_in_memory().expect("in-memory cache");
    let mut app = App::new(
        &settings,
        keymaps,
        cache,
        Arc::new(Git2Backend::new()),
        home.to_path_buf(),
    );
    app.start_dir = home.to_path_buf();
    app.last_area = Rect::new(0, 0, 100, 30);
    app
}

/// Initialize a repository with one commit at `path`.
pub fn init_repo_with_commit(path: &Path) -> PathBuf {
    let repo = git2::Repository::init(path).expect("init repo");
    std::fs::write(path.join("README.md"), "hello\n").expect("write file");
    let mut index = repo.index().expect("index");
    index
        .add_path(Path::new("README.md"))
        .expect("add README");
    index.write().expect("write index");
    let tree_id = index.write_tree().expect("write tree");
    let tree = repo.find_tree(tree_id).expect("find tree");
    let sig = git2::Signature::now("Test", "test@example.com").expect("signature");
    repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
        .expect("commit");
    path.to_path_buf()
}

/// Render the app into a test terminal and return the buffer as text.
pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|f| app.render(f)).expect("draw");
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
