//! Key binding notation and the navigation binding table.
//!
//! A binding is written as space-separated keys:
//!
//! | Notation | Key |
//! |---|---|
//! | `k`, `G` | that character |
//! | `c-u` | Ctrl+u |
//! | `up`, `pagedown`, `escape`, `f5` | named key |
//! | `<any>` | any printable character, captured |
//!
//! so `"g g"` is `g` pressed twice and `"f <any>"` is `f` followed by the
//! character to search for.

use crate::error::{Error, Result};
use crate::input::keyboard::{KeyCode, KeyEvent};
use crate::table::NavCommand;

/// One position of a key sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPattern {
    /// A specific key.
    Key(KeyEvent),
    /// Any printable character.
    AnyChar,
}

impl KeyPattern {
    #[must_use]
    pub fn matches(&self, key: &KeyEvent) -> bool {
        match self {
            Self::Key(expected) => expected.same_key(key),
            Self::AnyChar => key.printable().is_some(),
        }
    }
}

/// Parse a single key of the binding notation.
pub fn parse_key(token: &str) -> Result<KeyPattern> {
    let invalid = || Error::InvalidKeyNotation(token.to_string());
    if token == "<any>" {
        return Ok(KeyPattern::AnyChar);
    }
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyPattern::Key(KeyEvent::char(c)));
    }
    if let Some(rest) = token.strip_prefix("c-") {
        let mut chars = rest.chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(KeyPattern::Key(KeyEvent::with_ctrl(KeyCode::Char(c)))),
            _ => KeyCode::from_name(rest)
                .map(|code| KeyPattern::Key(KeyEvent::with_ctrl(code)))
                .ok_or_else(invalid),
        };
    }
    KeyCode::from_name(token)
        .map(|code| KeyPattern::Key(KeyEvent::key(code)))
        .ok_or_else(invalid)
}

/// Parse a space-separated key sequence such as `"g g"` or `"f <any>"`.
pub fn parse_key_sequence(notation: &str) -> Result<Vec<KeyPattern>> {
    let keys = notation
        .split_whitespace()
        .map(parse_key)
        .collect::<Result<Vec<_>>>()?;
    if keys.is_empty() {
        return Err(Error::InvalidKeyNotation(notation.to_string()));
    }
    Ok(keys)
}

/// What a binding does once its sequence completes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
    /// Search forward for the captured character.
    Find,
    /// Search backward for the captured character.
    FindBackward,
}

impl Action {
    /// The command for this action. Search actions need the character
    /// captured by `<any>`.
    #[must_use]
    pub const fn command(self, captured: Option<char>) -> Option<NavCommand> {
        Some(match (self, captured) {
            (Self::Up, _) => NavCommand::Up,
            (Self::Down, _) => NavCommand::Down,
            (Self::PageUp, _) => NavCommand::PageUp,
            (Self::PageDown, _) => NavCommand::PageDown,
            (Self::Top, _) => NavCommand::Top,
            (Self::Bottom, _) => NavCommand::Bottom,
            (Self::Find, Some(c)) => NavCommand::Find(c),
            (Self::FindBackward, Some(c)) => NavCommand::FindBackward(c),
            (Self::Find | Self::FindBackward, None) => return None,
        })
    }
}

/// A key sequence bound to an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding {
    pub keys: Vec<KeyPattern>,
    pub action: Action,
}

/// The binding table. Owned by the host and handed to a
/// [`NavigationController`](crate::input::NavigationController).
///
/// ```
/// use termtable::input::{Action, KeyMap};
///
/// let keymap = KeyMap::empty()
///     .with("space", Action::PageDown)?
///     .with("b", Action::PageUp)?;
/// assert_eq!(keymap.bindings().len(), 2);
/// # Ok::<(), termtable::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMap {
    bindings: Vec<Binding>,
}

impl Default for KeyMap {
    /// Vi-style table navigation plus the arrow and page keys.
    fn default() -> Self {
        use KeyPattern::{AnyChar, Key};
        let ch = |c| Key(KeyEvent::char(c));
        let ctrl = |c| Key(KeyEvent::with_ctrl(KeyCode::Char(c)));
        let key = |code| Key(KeyEvent::key(code));

        let table = [
            (vec![key(KeyCode::Up)], Action::Up),
            (vec![ch('k')], Action::Up),
            (vec![key(KeyCode::Down)], Action::Down),
            (vec![ch('j')], Action::Down),
            (vec![key(KeyCode::PageUp)], Action::PageUp),
            (vec![ctrl('u')], Action::PageUp),
            (vec![key(KeyCode::PageDown)], Action::PageDown),
            (vec![ctrl('d')], Action::PageDown),
            (vec![ch('g'), ch('g')], Action::Top),
            (vec![ch('G')], Action::Bottom),
            (vec![ch('f'), AnyChar], Action::Find),
            (vec![ch('F'), AnyChar], Action::FindBackward),
        ];
        Self {
            bindings: table
                .into_iter()
                .map(|(keys, action)| Binding { keys, action })
                .collect(),
        }
    }
}

impl KeyMap {
    /// A table with no bindings.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bind `notation` to `action`, after any existing bindings.
    pub fn bind(&mut self, notation: &str, action: Action) -> Result<()> {
        let keys = parse_key_sequence(notation)?;
        self.bindings.push(Binding { keys, action });
        Ok(())
    }

    /// Builder-style variant of [`bind`](Self::bind).
    pub fn with(mut self, notation: &str, action: Action) -> Result<Self> {
        self.bind(notation, action)?;
        Ok(self)
    }

    /// Remove every binding for `action`.
    pub fn unbind(&mut self, action: Action) {
        self.bindings.retain(|b| b.action != action);
    }

    #[must_use]
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }
}
