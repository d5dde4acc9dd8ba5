//! Key-combination strings and their parsed form.
//!
//! A combination is a `+`-separated chord such as `"ctrl+j"`,
//! `"shift+escape"` or `"cmd+alt+f5"`: zero or more modifiers followed by
//! exactly one key. Parsing is case-insensitive, and uppercase characters
//! normalize to `shift` plus the lowercase character so that `"J"`,
//! `"shift+j"` and a host-reported `Char('J') + SHIFT` event all land on
//! the same binding.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A parsed key combination: one key plus its modifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// The non-modifier key of the chord.
    pub code: KeyCode,
    /// Modifiers held with it.
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Create a combination from raw parts, applying normalization.
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        normalize(Self { code, modifiers })
    }

    /// The normalized combination a key event corresponds to.
    #[must_use]
    pub fn from_event(event: &KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

/// Fold shifted characters into a canonical `shift` + lowercase form.
fn normalize(combo: KeyCombo) -> KeyCombo {
    if let KeyCode::Char(c) = combo.code {
        if c.is_ascii_uppercase() {
            return KeyCombo {
                code: KeyCode::Char(c.to_ascii_lowercase()),
                modifiers: combo.modifiers | KeyModifiers::SHIFT,
            };
        }
    }
    combo
}

/// Parse one modifier token.
fn parse_modifier(token: &str) -> Option<KeyModifiers> {
    match token {
        "ctrl" | "control" => Some(KeyModifiers::CONTROL),
        "alt" | "option" => Some(KeyModifiers::ALT),
        "shift" => Some(KeyModifiers::SHIFT),
        "cmd" | "command" | "meta" | "super" => Some(KeyModifiers::SUPER),
        _ => None,
    }
}

/// Parse the final key token of a combination.
fn parse_key(token: &str) -> Result<KeyCode> {
    let code = match token {
        "escape" | "esc" => KeyCode::Esc,
        "enter" | "return" => KeyCode::Enter,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" | "ins" => KeyCode::Insert,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "plus" => KeyCode::Char('+'),
        _ => match token.strip_prefix('f') {
            Some(digits) if !digits.is_empty() => {
                let n: u8 = digits
                    .parse()
                    .map_err(|_| anyhow!("unknown key name '{token}'"))?;
                if !(1..=12).contains(&n) {
                    bail!("function key out of range: '{token}'");
                }
                KeyCode::F(n)
            }
            _ => bail!("unknown key name '{token}'"),
        },
    };
    Ok(code)
}

impl FromStr for KeyCombo {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_ascii_lowercase();
        // Preserve case of single-character keys so 'J' normalizes to
        // shift+j rather than being flattened before normalization.
        let tokens: Vec<&str> = s.trim().split('+').map(str::trim).collect();
        let lowered_tokens: Vec<&str> = lowered.split('+').map(str::trim).collect();
        if tokens.is_empty() || lowered_tokens.iter().any(|t| t.is_empty()) {
            bail!("empty combination '{s}'");
        }

        let mut modifiers = KeyModifiers::NONE;
        let last = tokens.len() - 1;
        for token in &lowered_tokens[..last] {
            let m = parse_modifier(token)
                .ok_or_else(|| anyhow!("unknown modifier '{token}' in '{s}'"))?;
            modifiers |= m;
        }

        let mut key_chars = tokens[last].chars();
        let code = match (key_chars.next(), key_chars.next()) {
            (Some(c), None) => KeyCode::Char(c),
            _ => parse_key(lowered_tokens[last])?,
        };

        Ok(Self::new(code, modifiers))
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            write!(f, "ctrl+")?;
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            write!(f, "alt+")?;
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            write!(f, "shift+")?;
        }
        if self.modifiers.contains(KeyModifiers::SUPER) {
            write!(f, "cmd+")?;
        }
        match self.code {
            KeyCode::Char(' ') => write!(f, "space"),
            KeyCode::Char('+') => write!(f, "plus"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::Esc => write!(f, "escape"),
            KeyCode::Enter => write!(f, "enter"),
            KeyCode::Tab => write!(f, "tab"),
            KeyCode::Backspace => write!(f, "backspace"),
            KeyCode::Delete => write!(f, "delete"),
            KeyCode::Insert => write!(f, "insert"),
            KeyCode::Up => write!(f, "up"),
            KeyCode::Down => write!(f, "down"),
            KeyCode::Left => write!(f, "left"),
            KeyCode::Right => write!(f, "right"),
            KeyCode::Home => write!(f, "home"),
            KeyCode::End => write!(f, "end"),
            KeyCode::PageUp => write!(f, "pageup"),
            KeyCode::PageDown => write!(f, "pagedown"),
            KeyCode::F(n) => write!(f, "f{n}"),
            other => write!(f, "{other:?}"),
        }
    }
}
