//! Key identifier parsing and canonical key names.
//!
//! Responsibilities:
//! - Parse key identifiers such as `q`, `ctrl+c`, `shift+tab`, `f5` or
//!   `question_mark` into a structured [`ParsedKey`].
//! - Expand single characters into canonical key names (`?` -> `question_mark`).
//! - Render short labels for footer hints.
//!
//! Does NOT handle:
//! - Integration with crossterm (that's in the TUI crate).
//! - Binding resolution against action registries (see `bindings`).
//!
//! Invariants:
//! - `character_to_key` is total and injective over `char`.
//! - Every name produced by `character_to_key` parses back to the same
//!   character through `parse_key`.

use std::fmt;

use thiserror::Error;

/// Errors that can occur when parsing key identifiers.
#[derive(Debug, Error, PartialEq)]
pub enum KeybindError {
    /// Invalid key syntax
    #[error("Invalid key syntax: '{key}'. Expected format like 'q', 'ctrl+x', 'shift+tab', 'f1'")]
    InvalidSyntax {
        /// The invalid key string
        key: String,
    },

    /// Unknown key name
    #[error("Unknown key name: '{name}'")]
    UnknownKey {
        /// The unknown key name
        name: String,
    },
}

/// A parsed key combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedKey {
    /// The key code name (for cross-crate compatibility, we use strings)
    pub code: KeyCodeName,
    /// Modifier flags
    pub modifiers: ModifierFlags,
}

impl ParsedKey {
    /// Short label used by the footer, e.g. `^c`, `?`, `F5`.
    pub fn label(&self) -> String {
        let key = match &self.code {
            KeyCodeName::Char(c) => c.to_string(),
            other => other.to_string(),
        };
        let mut prefix = String::new();
        if self.modifiers.ctrl {
            prefix.push('^');
        }
        if self.modifiers.alt {
            prefix.push_str("alt+");
        }
        if self.modifiers.shift && !matches!(self.code, KeyCodeName::BackTab) {
            prefix.push_str("shift+");
        }
        format!("{prefix}{key}")
    }
}

/// Key code names that can be parsed from config strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyCodeName {
    /// A character key (e.g., 'a', '1', '?')
    Char(char),
    /// Function key F1-F20
    F(u8),
    /// Escape key
    Esc,
    /// Enter/Return key
    Enter,
    /// Space key
    Space,
    /// Tab key
    Tab,
    /// BackTab (Shift+Tab) key
    BackTab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Insert key
    Insert,
    /// Home key
    Home,
    /// End key
    End,
    /// Page Up key
    PageUp,
    /// Page Down key
    PageDown,
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
}

impl fmt::Display for KeyCodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", character_to_key(*c)),
            Self::F(n) => write!(f, "F{}", n),
            Self::Esc => write!(f, "Esc"),
            Self::Enter => write!(f, "Enter"),
            Self::Space => write!(f, "Space"),
            Self::Tab => write!(f, "Tab"),
            Self::BackTab => write!(f, "BackTab"),
            Self::Backspace => write!(f, "Backspace"),
            Self::Delete => write!(f, "Delete"),
            Self::Insert => write!(f, "Insert"),
            Self::Home => write!(f, "Home"),
            Self::End => write!(f, "End"),
            Self::PageUp => write!(f, "PageUp"),
            Self::PageDown => write!(f, "PageDown"),
            Self::Up => write!(f, "Up"),
            Self::Down => write!(f, "Down"),
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// Modifier flags for key combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ModifierFlags {
    /// Control key pressed
    pub ctrl: bool,
    /// Shift key pressed
    pub shift: bool,
    /// Alt/Option key pressed
    pub alt: bool,
}

/// Canonical names for printable ASCII characters that are not alphanumeric.
const PUNCTUATION_NAMES: &[(char, &str)] = &[
    (' ', "space"),
    ('!', "exclamation_mark"),
    ('"', "quotation_mark"),
    ('#', "number_sign"),
    ('$', "dollar_sign"),
    ('%', "percent_sign"),
    ('&', "ampersand"),
    ('\'', "apostrophe"),
    ('(', "left_parenthesis"),
    (')', "right_parenthesis"),
    ('*', "asterisk"),
    ('+', "plus"),
    (',', "comma"),
    ('-', "minus"),
    ('.', "full_stop"),
    ('/', "slash"),
    (':', "colon"),
    (';', "semicolon"),
    ('<', "less_than_sign"),
    ('=', "equals_sign"),
    ('>', "greater_than_sign"),
    ('?', "question_mark"),
    ('@', "at"),
    ('[', "left_square_bracket"),
    ('\\', "backslash"),
    (']', "right_square_bracket"),
    ('^', "circumflex_accent"),
    ('_', "underscore"),
    ('`', "grave_accent"),
    ('{', "left_curly_bracket"),
    ('|', "vertical_line"),
    ('}', "right_curly_bracket"),
    ('~', "tilde"),
    ('\t', "tab"),
];

const UNICODE_PREFIX: &str = "unicode_";

/// Expand a single character into its canonical key name.
///
/// Alphanumeric characters stay as they are. ASCII punctuation, space and tab
/// get descriptive names; anything else becomes `unicode_XXXX`.
///
/// ```
/// use thalia_config::keybind::character_to_key;
///
/// assert_eq!(character_to_key('q'), "q");
/// assert_eq!(character_to_key('?'), "question_mark");
/// assert_eq!(character_to_key('/'), "slash");
/// ```
pub fn character_to_key(c: char) -> String {
    if c.is_alphanumeric() {
        return c.to_string();
    }
    PUNCTUATION_NAMES
        .iter()
        .find(|(ch, _)| *ch == c)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| format!("{UNICODE_PREFIX}{:04x}", u32::from(c)))
}

/// Reverse of [`character_to_key`] for multi-character names.
pub fn key_name_to_char(name: &str) -> Option<char> {
    if let Some(hex) = name.strip_prefix(UNICODE_PREFIX) {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    PUNCTUATION_NAMES
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(ch, _)| *ch)
}

/// Parse a key string like "ctrl+x", "f1", "shift+tab" into structured form.
///
/// # Examples
///
/// ```
/// use thalia_config::keybind::{parse_key, KeyCodeName};
///
/// let key = parse_key("ctrl+x").unwrap();
/// assert!(matches!(key.code, KeyCodeName::Char('x')));
/// assert!(key.modifiers.ctrl);
///
/// let key = parse_key("question_mark").unwrap();
/// assert!(matches!(key.code, KeyCodeName::Char('?')));
/// ```
pub fn parse_key(key_str: &str) -> Result<ParsedKey, KeybindError> {
    let key_str = key_str.trim();

    if key_str.is_empty() {
        return Err(KeybindError::InvalidSyntax {
            key: key_str.to_string(),
        });
    }

    let parts: Vec<&str> = key_str.split('+').map(|s| s.trim()).collect();

    let mut modifiers = ModifierFlags::default();
    let mut key_name = "";

    for part in &parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" => modifiers.ctrl = true,
            "shift" => modifiers.shift = true,
            "alt" => modifiers.alt = true,
            _ => {
                if key_name.is_empty() {
                    key_name = part;
                } else {
                    // Multiple non-modifier parts is invalid
                    return Err(KeybindError::InvalidSyntax {
                        key: key_str.to_string(),
                    });
                }
            }
        }
    }

    if key_name.is_empty() {
        return Err(KeybindError::InvalidSyntax {
            key: key_str.to_string(),
        });
    }

    let code = parse_key_code(key_name)?;

    let code = if matches!(code, KeyCodeName::Tab) && modifiers.shift {
        KeyCodeName::BackTab
    } else {
        code
    };

    Ok(ParsedKey { code, modifiers })
}

/// Parse a key code name (without modifiers).
fn parse_key_code(name: &str) -> Result<KeyCodeName, KeybindError> {
    let name_lower = name.to_ascii_lowercase();

    match name_lower.as_str() {
        "esc" | "escape" => return Ok(KeyCodeName::Esc),
        "enter" | "return" => return Ok(KeyCodeName::Enter),
        "space" => return Ok(KeyCodeName::Space),
        "tab" => return Ok(KeyCodeName::Tab),
        "backtab" => return Ok(KeyCodeName::BackTab),
        "backspace" => return Ok(KeyCodeName::Backspace),
        "delete" | "del" => return Ok(KeyCodeName::Delete),
        "insert" | "ins" => return Ok(KeyCodeName::Insert),
        "home" => return Ok(KeyCodeName::Home),
        "end" => return Ok(KeyCodeName::End),
        "pageup" | "page_up" | "pgup" => return Ok(KeyCodeName::PageUp),
        "pagedown" | "page_down" | "pgdn" => return Ok(KeyCodeName::PageDown),
        "up" => return Ok(KeyCodeName::Up),
        "down" => return Ok(KeyCodeName::Down),
        "left" => return Ok(KeyCodeName::Left),
        "right" => return Ok(KeyCodeName::Right),
        _ => {}
    }

    if let Some(num_str) = name_lower.strip_prefix('f')
        && let Ok(num) = num_str.parse::<u8>()
        && (1..=20).contains(&num)
    {
        return Ok(KeyCodeName::F(num));
    }

    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCodeName::Char(c));
    }

    if let Some(c) = key_name_to_char(&name_lower) {
        return Ok(KeyCodeName::Char(c));
    }

    Err(KeybindError::UnknownKey {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_char() {
        let key = parse_key("q").unwrap();
        assert_eq!(key.code, KeyCodeName::Char('q'));
        assert_eq!(key.modifiers, ModifierFlags::default());
    }

    #[test]
    fn test_parse_ctrl_combo() {
        let key = parse_key("ctrl+c").unwrap();
        assert_eq!(key.code, KeyCodeName::Char('c'));
        assert!(key.modifiers.ctrl);
        assert!(!key.modifiers.shift);
        assert!(!key.modifiers.alt);
    }

    #[test]
    fn test_parse_canonical_names() {
        assert_eq!(
            parse_key("question_mark").unwrap().code,
            KeyCodeName::Char('?')
        );
        assert_eq!(parse_key("slash").unwrap().code, KeyCodeName::Char('/'));
        assert_eq!(parse_key("plus").unwrap().code, KeyCodeName::Char('+'));
        assert_eq!(parse_key("comma").unwrap().code, KeyCodeName::Char(','));
        assert_eq!(
            parse_key("ctrl+backslash").unwrap().code,
            KeyCodeName::Char('\\')
        );
        assert_eq!(
            parse_key("unicode_00a7").unwrap().code,
            KeyCodeName::Char('§')
        );
    }

    #[test]
    fn test_space_and_tab_names_win_over_chars() {
        assert_eq!(parse_key("space").unwrap().code, KeyCodeName::Space);
        assert_eq!(parse_key("tab").unwrap().code, KeyCodeName::Tab);
        assert_eq!(parse_key("shift+tab").unwrap().code, KeyCodeName::BackTab);
    }

    #[test]
    fn test_parse_function_keys() {
        assert_eq!(parse_key("f5").unwrap().code, KeyCodeName::F(5));
        assert_eq!(parse_key("F20").unwrap().code, KeyCodeName::F(20));
        assert!(parse_key("f0").is_err());
        assert!(parse_key("f21").is_err());
    }

    #[test]
    fn test_invalid_syntax() {
        assert!(matches!(
            parse_key(""),
            Err(KeybindError::InvalidSyntax { .. })
        ));
        assert!(matches!(
            parse_key("ctrl+shift"),
            Err(KeybindError::InvalidSyntax { .. })
        ));
        assert!(matches!(
            parse_key("a+b"),
            Err(KeybindError::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn test_unknown_key() {
        assert!(matches!(
            parse_key("ctrl+nonsense"),
            Err(KeybindError::UnknownKey { .. })
        ));
    }

    #[test]
    fn test_character_to_key_examples() {
        assert_eq!(character_to_key('a'), "a");
        assert_eq!(character_to_key('Z'), "Z");
        assert_eq!(character_to_key('7'), "7");
        assert_eq!(character_to_key('é'), "é");
        assert_eq!(character_to_key('/'), "slash");
        assert_eq!(character_to_key('\\'), "backslash");
        assert_eq!(character_to_key('@'), "at");
        assert_eq!(character_to_key('-'), "minus");
        assert_eq!(character_to_key('+'), "plus");
        assert_eq!(character_to_key('_'), "underscore");
        assert_eq!(character_to_key(' '), "space");
        assert_eq!(character_to_key('\u{1b}'), "unicode_001b");
    }

    #[test]
    fn test_punctuation_table_has_unique_entries() {
        for (i, (c, name)) in PUNCTUATION_NAMES.iter().enumerate() {
            for (other_c, other_name) in &PUNCTUATION_NAMES[i + 1..] {
                assert_ne!(c, other_c);
                assert_ne!(name, other_name);
            }
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(parse_key("ctrl+c").unwrap().label(), "^c");
        assert_eq!(parse_key("question_mark").unwrap().label(), "?");
        assert_eq!(parse_key("f5").unwrap().label(), "F5");
        assert_eq!(parse_key("shift+tab").unwrap().label(), "BackTab");
        assert_eq!(parse_key("o").unwrap().label(), "o");
    }
}
