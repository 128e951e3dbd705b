//! Parsing of style strings such as `"bold #8AADF4 on black"`.
//!
//! The grammar is whitespace-separated words: attribute names (`bold`,
//! `italic`, ...), `not <attribute>`, a foreground color, and `on <color>`
//! for the background. Colors are named (`red`, `bright_blue`), hex
//! (`#RRGGBB`), `rgb(r,g,b)`, `color(n)` or `default`.

use ratatui::style::{Color, Modifier, Style};
use thiserror::Error;

/// Errors produced by [`parse_style`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StyleError {
    /// The string contained a word that is neither an attribute nor a color.
    #[error("unable to parse '{word}' in style '{style}'")]
    UnknownWord { style: String, word: String },

    /// `on` or `not` was not followed by anything.
    #[error("expected a word after '{keyword}' in style '{style}'")]
    Dangling { style: String, keyword: String },
}

/// Parse a style string into a ratatui [`Style`].
///
/// ```
/// use ratatui::style::{Color, Modifier};
/// use thalia_config::style::parse_style;
///
/// let style = parse_style("bold #8AADF4 on black").unwrap();
/// assert_eq!(style.fg, Some(Color::Rgb(0x8a, 0xad, 0xf4)));
/// assert_eq!(style.bg, Some(Color::Black));
/// assert!(style.add_modifier.contains(Modifier::BOLD));
/// ```
pub fn parse_style(definition: &str) -> Result<Style, StyleError> {
    let mut style = Style::default();
    let mut words = definition.split_whitespace();

    while let Some(word) = words.next() {
        let lower = word.to_ascii_lowercase();
        match lower.as_str() {
            "none" => {}
            "on" => {
                let next = words.next().ok_or_else(|| StyleError::Dangling {
                    style: definition.to_string(),
                    keyword: word.to_string(),
                })?;
                let color = parse_color(next).ok_or_else(|| StyleError::UnknownWord {
                    style: definition.to_string(),
                    word: next.to_string(),
                })?;
                style = style.bg(color);
            }
            "not" => {
                let next = words.next().ok_or_else(|| StyleError::Dangling {
                    style: definition.to_string(),
                    keyword: word.to_string(),
                })?;
                let modifier = parse_modifier(next).ok_or_else(|| StyleError::UnknownWord {
                    style: definition.to_string(),
                    word: next.to_string(),
                })?;
                style = style.remove_modifier(modifier);
            }
            _ => {
                if let Some(modifier) = parse_modifier(&lower) {
                    style = style.add_modifier(modifier);
                } else if let Some(color) = parse_color(&lower) {
                    style = style.fg(color);
                } else {
                    return Err(StyleError::UnknownWord {
                        style: definition.to_string(),
                        word: word.to_string(),
                    });
                }
            }
        }
    }

    Ok(style)
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    Some(match word.to_ascii_lowercase().as_str() {
        "bold" | "b" => Modifier::BOLD,
        "dim" | "d" => Modifier::DIM,
        "italic" | "i" => Modifier::ITALIC,
        "underline" | "u" => Modifier::UNDERLINED,
        "blink" => Modifier::SLOW_BLINK,
        "blink2" => Modifier::RAPID_BLINK,
        "reverse" | "r" => Modifier::REVERSED,
        "conceal" | "c" => Modifier::HIDDEN,
        "strike" | "s" => Modifier::CROSSED_OUT,
        _ => return None,
    })
}

fn parse_color(word: &str) -> Option<Color> {
    let word = word.to_ascii_lowercase();

    if let Some(hex) = word.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        let [_, r, g, b] = value.to_be_bytes();
        return Some(Color::Rgb(r, g, b));
    }

    if let Some(args) = word
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let parts: Vec<u8> = args
            .split(',')
            .map(|p| p.trim().parse::<u8>())
            .collect::<Result<_, _>>()
            .ok()?;
        return match parts.as_slice() {
            [r, g, b] => Some(Color::Rgb(*r, *g, *b)),
            _ => None,
        };
    }

    if let Some(index) = word
        .strip_prefix("color(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return index.trim().parse::<u8>().ok().map(Color::Indexed);
    }

    Some(match word.as_str() {
        "default" => Color::Reset,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::Gray,
        "bright_black" | "grey" | "gray" => Color::DarkGray,
        "bright_red" => Color::LightRed,
        "bright_green" => Color::LightGreen,
        "bright_yellow" => Color::LightYellow,
        "bright_blue" => Color::LightBlue,
        "bright_magenta" => Color::LightMagenta,
        "bright_cyan" => Color::LightCyan,
        "bright_white" => Color::White,
        _ => return None,
    })
}
