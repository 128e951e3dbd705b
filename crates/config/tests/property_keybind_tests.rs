//! Property-based tests for key name expansion.
//!
//! Test coverage:
//! - `character_to_key` never yields an empty or comma-containing name.
//! - Distinct characters never share a name.
//! - Expanded names parse back to the original character.

use proptest::prelude::*;

use thalia_config::keybind::{KeyCodeName, character_to_key, parse_key};

/// Characters that `parse_key` maps to dedicated key codes instead of `Char`.
fn has_dedicated_code(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

proptest! {
    #[test]
    fn prop_names_are_non_empty_and_splittable(c in any::<char>()) {
        let name = character_to_key(c);
        prop_assert!(!name.is_empty());
        prop_assert!(!name.contains(','));
        prop_assert!(!name.trim().is_empty());
    }

    #[test]
    fn prop_distinct_chars_get_distinct_names(a in any::<char>(), b in any::<char>()) {
        prop_assume!(a != b);
        prop_assert_ne!(character_to_key(a), character_to_key(b));
    }

    #[test]
    fn prop_names_parse_back(c in any::<char>()) {
        prop_assume!(!has_dedicated_code(c));
        let name = character_to_key(c);
        let parsed = parse_key(&name).unwrap();
        prop_assert_eq!(parsed.code, KeyCodeName::Char(c));
        prop_assert!(!parsed.modifiers.ctrl && !parsed.modifiers.alt && !parsed.modifiers.shift);
    }

    #[test]
    fn prop_ascii_punctuation_gets_descriptive_name(c in proptest::char::range('!', '~')) {
        prop_assume!(!c.is_alphanumeric());
        let name = character_to_key(c);
        prop_assert!(name.len() > 1);
        prop_assert!(!name.starts_with("unicode_"));
    }
}
