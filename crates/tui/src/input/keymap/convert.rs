//! Conversion from config key names to crossterm events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thalia_config::keybind::{KeyCodeName, ModifierFlags, ParsedKey};

/// Converts a ParsedKey to a crossterm KeyEvent.
pub fn parsed_key_to_crossterm(parsed: &ParsedKey) -> KeyEvent {
    let code = match &parsed.code {
        KeyCodeName::Char(c) => KeyCode::Char(*c),
        KeyCodeName::F(n) => KeyCode::F(*n),
        KeyCodeName::Esc => KeyCode::Esc,
        KeyCodeName::Enter => KeyCode::Enter,
        KeyCodeName::Space => KeyCode::Char(' '),
        KeyCodeName::Tab => KeyCode::Tab,
        KeyCodeName::BackTab => KeyCode::BackTab,
        KeyCodeName::Backspace => KeyCode::Backspace,
        KeyCodeName::Delete => KeyCode::Delete,
        KeyCodeName::Insert => KeyCode::Insert,
        KeyCodeName::Home => KeyCode::Home,
        KeyCodeName::End => KeyCode::End,
        KeyCodeName::PageUp => KeyCode::PageUp,
        KeyCodeName::PageDown => KeyCode::PageDown,
        KeyCodeName::Up => KeyCode::Up,
        KeyCodeName::Down => KeyCode::Down,
        KeyCodeName::Left => KeyCode::Left,
        KeyCodeName::Right => KeyCode::Right,
    };

    KeyEvent::new(code, modifier_flags_to_crossterm(&parsed.modifiers))
}

fn modifier_flags_to_crossterm(flags: &ModifierFlags) -> KeyModifiers {
    let mut modifiers = KeyModifiers::NONE;
    if flags.ctrl {
        modifiers |= KeyModifiers::CONTROL;
    }
    if flags.shift {
        modifiers |= KeyModifiers::SHIFT;
    }
    if flags.alt {
        modifiers |= KeyModifiers::ALT;
    }
    modifiers
}
