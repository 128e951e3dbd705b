//! Per-context keymaps built from resolved bindings.
//!
//! Responsibilities:
//! - Turn `ResolvedBinding`s into crossterm key matchers.
//! - Resolve a `KeyEvent` to an action name within one context.
//! - Produce the footer hints for bindings marked `show`.
//!
//! Non-responsibilities:
//! - Deciding which context is active (see `app::input`).
//! - Text entry inside modals (handled by the modal state).
//!
//! Invariants:
//! - Keymaps are built once at startup and never mutated.
//! - Resolution returns the first matching binding in authored order.

mod convert;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

use thalia_config::keybind::{KeybindError, parse_key};
use thalia_config::{BindingError, ResolvedBinding, Settings, resolve_bindings};

pub use convert::parsed_key_to_crossterm;

/// Errors raised while building keymaps.
#[derive(Debug, Error)]
pub enum KeymapError {
    #[error(transparent)]
    Binding(#[from] BindingError),

    #[error("Invalid key '{key}' bound to '{action}'")]
    InvalidKey {
        key: String,
        action: String,
        #[source]
        source: KeybindError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Matcher {
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
}

impl Matcher {
    fn matches(self, key: KeyEvent) -> bool {
        match self {
            Matcher::Key { code, modifiers } => {
                key.code == code && normalize_modifiers(key) == modifiers
            }
        }
    }
}

/// Terminals report shifted characters and BackTab with SHIFT set; the
/// key code already carries it.
fn normalize_modifiers(key: KeyEvent) -> KeyModifiers {
    match key.code {
        KeyCode::Char(_) | KeyCode::BackTab => key.modifiers.difference(KeyModifiers::SHIFT),
        _ => key.modifiers,
    }
}

/// One key bound to one action.
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: String,
    pub label: String,
    pub action: String,
    pub description: &'static str,
    pub show: bool,
    matcher: Matcher,
}

/// A footer entry: a key label and what it does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterHint {
    pub key: String,
    pub description: &'static str,
}

/// The bindings of one context.
#[derive(Debug, Clone, Default)]
pub struct ContextKeymap {
    bindings: Vec<Keybinding>,
}

impl ContextKeymap {
    pub fn from_resolved(resolved: Vec<ResolvedBinding>) -> Result<Self, KeymapError> {
        let bindings = resolved
            .into_iter()
            .map(|binding| {
                let parsed = parse_key(&binding.key).map_err(|source| KeymapError::InvalidKey {
                    key: binding.key.clone(),
                    action: binding.action.clone(),
                    source,
                })?;
                let event = parsed_key_to_crossterm(&parsed);
                Ok(Keybinding {
                    label: parsed.label(),
                    key: binding.key,
                    action: binding.action,
                    description: binding.description,
                    show: binding.show,
                    matcher: Matcher::Key {
                        code: event.code,
                        modifiers: normalize_modifiers(event),
                    },
                })
            })
            .collect::<Result<Vec<_>, KeymapError>>()?;
        Ok(Self { bindings })
    }

    /// Action name bound to `key`, if any.
    pub fn resolve(&self, key: KeyEvent) -> Option<&str> {
        self.bindings
            .iter()
            .find(|b| b.matcher.matches(key))
            .map(|b| b.action.as_str())
    }

    pub fn bindings(&self) -> &[Keybinding] {
        &self.bindings
    }

    /// Footer hints for shown bindings, one per action, labelled with the
    /// first key bound to it.
    pub fn hints(&self) -> Vec<FooterHint> {
        let mut hints: Vec<FooterHint> = Vec::new();
        let mut seen: Vec<&str> = Vec::new();
        for binding in self.bindings.iter().filter(|b| b.show) {
            if seen.contains(&binding.action.as_str()) {
                continue;
            }
            seen.push(&binding.action);
            hints.push(FooterHint {
                key: binding.label.clone(),
                description: binding.description,
            });
        }
        hints
    }
}

/// Keymaps for every context.
#[derive(Debug, Clone, Default)]
pub struct Keymaps {
    pub global: ContextKeymap,
    pub dashboard: ContextKeymap,
    pub workspace: ContextKeymap,
}

impl Keymaps {
    /// Resolve all binding sets from the settings tree.
    pub fn from_settings(settings: &Settings) -> Result<Self, KeymapError> {
        let load = |path: &str| -> Result<ContextKeymap, KeymapError> {
            let keymap = ContextKeymap::from_resolved(resolve_bindings(settings, path)?)?;
            tracing::debug!(path, count = keymap.bindings().len(), "Loaded keymap");
            Ok(keymap)
        };
        Ok(Self {
            global: load("bindings")?,
            dashboard: load("dashboard.bindings")?,
            workspace: load("workspace.bindings")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn binding(key: &str, action: &str, show: bool) -> ResolvedBinding {
        ResolvedBinding {
            key: key.to_string(),
            action: action.to_string(),
            description: "desc",
            show,
        }
    }

    #[test]
    fn resolves_ctrl_c() {
        let keymap = ContextKeymap::from_resolved(vec![binding("ctrl+c", "quit", true)]).unwrap();
        assert_eq!(
            keymap.resolve(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some("quit")
        );
        assert_eq!(keymap.resolve(key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn resolves_shifted_punctuation() {
        let keymap =
            ContextKeymap::from_resolved(vec![binding("question_mark", "help", true)]).unwrap();
        assert_eq!(
            keymap.resolve(key(KeyCode::Char('?'), KeyModifiers::SHIFT)),
            Some("help")
        );
        assert_eq!(
            keymap.resolve(key(KeyCode::Char('?'), KeyModifiers::NONE)),
            Some("help")
        );
    }

    #[test]
    fn resolves_back_tab_and_function_keys() {
        let keymap = ContextKeymap::from_resolved(vec![
            binding("shift+tab", "back", true),
            binding("f5", "refresh", true),
        ])
        .unwrap();
        assert_eq!(
            keymap.resolve(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some("back")
        );
        assert_eq!(keymap.resolve(key(KeyCode::F(5), KeyModifiers::NONE)), Some("refresh"));
    }

    #[test]
    fn invalid_key_is_reported() {
        let err = ContextKeymap::from_resolved(vec![binding("hyper+x", "quit", true)]).unwrap_err();
        assert!(matches!(err, KeymapError::InvalidKey { ref key, .. } if key == "hyper+x"));
    }

    #[test]
    fn hints_group_by_action() {
        let keymap = ContextKeymap::from_resolved(vec![
            binding("q", "quit", true),
            binding("ctrl+c", "quit", true),
            binding("x", "hidden", false),
        ])
        .unwrap();
        assert_eq!(
            keymap.hints(),
            vec![FooterHint {
                key: "q".to_string(),
                description: "desc"
            }]
        );
    }
}
