//! Key presses, key scripts, and their mapping to actions.
//!
//! A key script is a line of text describing key presses. Whitespace is
//! skipped, every other character is a key of its own, and named keys are
//! written in braces:
//!
//! ```text
//! 12.5 × 4 {Enter}
//! 99{Backspace}{Backspace}7
//! {Shift+Backspace}
//! ```

use thiserror::Error;

use crate::calculator::{DECIMAL_SEPARATOR, Operator};

use super::Action;

/// A physical or virtual key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Escape,
}

/// A key together with the shift modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub shift: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeymapError {
    #[error("unknown key name `{0}`")]
    UnknownKey(String),
    #[error("unterminated `{{` at offset {0}")]
    Unterminated(usize),
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self { key, shift: false }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

impl From<Key> for KeyPress {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

/// Map a key press to the action it triggers, if any.
pub fn action_for(press: KeyPress) -> Option<Action> {
    match press.key {
        Key::Char(c) if c.is_ascii_digit() || c == DECIMAL_SEPARATOR => Some(Action::Digit(c)),
        Key::Char('=') => Some(Action::Equals),
        Key::Char(c) => Operator::from_glyph(c).map(Action::Operator),
        Key::Enter => Some(Action::Equals),
        Key::Backspace if press.shift => Some(Action::Clear),
        Key::Backspace => Some(Action::Delete),
        Key::Escape => Some(Action::Clear),
    }
}

/// Parse a key script into key presses.
pub fn parse_key_sequence(script: &str) -> Result<Vec<KeyPress>, KeymapError> {
    let mut presses = Vec::new();
    let mut rest = script.char_indices();

    while let Some((offset, c)) = rest.next() {
        if c.is_whitespace() {
            continue;
        }
        if c != '{' {
            presses.push(KeyPress::new(Key::Char(c)));
            continue;
        }

        let name: String = rest
            .by_ref()
            .map(|(_, c)| c)
            .take_while(|&c| c != '}')
            .collect();
        if !script[offset..].contains('}') {
            return Err(KeymapError::Unterminated(offset));
        }
        presses.push(parse_named_key(&name)?);
    }

    Ok(presses)
}

fn parse_named_key(name: &str) -> Result<KeyPress, KeymapError> {
    let trimmed = name.trim();
    let (shift, base) = match trimmed.split_once('+') {
        Some((modifier, base)) if modifier.trim().eq_ignore_ascii_case("shift") => {
            (true, base.trim())
        }
        _ => (false, trimmed),
    };

    let key = match base.to_ascii_lowercase().as_str() {
        "enter" | "return" => Key::Enter,
        "backspace" => Key::Backspace,
        "escape" | "esc" => Key::Escape,
        _ => return Err(KeymapError::UnknownKey(name.to_string())),
    };

    let press = KeyPress::new(key);
    Ok(if shift { press.with_shift() } else { press })
}
