//! Keyboard event types.

use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct KeyModifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Alt/Option key.
        const ALT = 0b0000_0010;
        /// Control key.
        const CTRL = 0b0000_0100;
    }
}

/// A key code representing a keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up key.
    PageUp,
    /// Page Down key.
    PageDown,
    /// Tab key.
    Tab,
    /// Delete key.
    Delete,
    /// Function key (F1-F24).
    F(u8),
    /// A character key (includes space).
    Char(char),
    /// Escape key.
    Esc,
}

impl KeyCode {
    /// Look up a named key as written in key bindings (`"up"`, `"pagedown"`,
    /// `"f5"`, `"space"`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let code = match name {
            "backspace" => Self::Backspace,
            "enter" => Self::Enter,
            "left" => Self::Left,
            "right" => Self::Right,
            "up" => Self::Up,
            "down" => Self::Down,
            "home" => Self::Home,
            "end" => Self::End,
            "pageup" => Self::PageUp,
            "pagedown" => Self::PageDown,
            "tab" => Self::Tab,
            "delete" => Self::Delete,
            "escape" => Self::Esc,
            "space" => Self::Char(' '),
            _ => {
                let n: u8 = name.strip_prefix('f')?.parse().ok()?;
                return (1..=24).contains(&n).then_some(Self::F(n));
            }
        };
        Some(code)
    }

    /// Check if this is a character key.
    #[must_use]
    pub fn is_char(&self) -> bool {
        matches!(self, Self::Char(_))
    }

    /// Get the character if this is a character key.
    #[must_use]
    pub fn char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }
}

/// A keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The key code.
    pub code: KeyCode,
    /// Modifier keys held.
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    /// Create a new key event.
    #[must_use]
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key event with no modifiers.
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::empty())
    }

    /// Create a character key event.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    /// Create a Ctrl+key event.
    #[must_use]
    pub fn with_ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CTRL)
    }

    /// Check if Shift is held.
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(KeyModifiers::SHIFT)
    }

    /// Check if Ctrl is held.
    #[must_use]
    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(KeyModifiers::CTRL)
    }

    /// Check if Alt is held.
    #[must_use]
    pub fn alt(&self) -> bool {
        self.modifiers.contains(KeyModifiers::ALT)
    }

    /// A character typed without Ctrl or Alt. Shift is already folded into
    /// the character itself.
    #[must_use]
    pub fn printable(&self) -> Option<char> {
        if self.ctrl() || self.alt() {
            return None;
        }
        self.code.char().filter(|c| !c.is_control())
    }

    /// Whether this event is the same key as `other`.
    ///
    /// Shift is ignored for character keys, since terminals disagree on
    /// whether `G` arrives with the modifier set.
    #[must_use]
    pub fn same_key(&self, other: &Self) -> bool {
        if self.code != other.code {
            return false;
        }
        if self.code.is_char() {
            let mask = KeyModifiers::CTRL | KeyModifiers::ALT;
            self.modifiers & mask == other.modifiers & mask
        } else {
            self.modifiers == other.modifiers
        }
    }
}

impl From<char> for KeyEvent {
    fn from(c: char) -> Self {
        Self::char(c)
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::key(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event_creation() {
        let event = KeyEvent::char('a');
        assert_eq!(event.code, KeyCode::Char('a'));
        assert!(event.modifiers.is_empty());
    }

    #[test]
    fn test_key_event_modifiers() {
        let event = KeyEvent::with_ctrl(KeyCode::Char('u'));
        assert!(event.ctrl());
        assert!(!event.shift());
        assert!(!event.alt());
        assert_eq!(event.printable(), None);
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(KeyCode::from_name("pageup"), Some(KeyCode::PageUp));
        assert_eq!(KeyCode::from_name("escape"), Some(KeyCode::Esc));
        assert_eq!(KeyCode::from_name("space"), Some(KeyCode::Char(' ')));
        assert_eq!(KeyCode::from_name("f12"), Some(KeyCode::F(12)));
        assert_eq!(KeyCode::from_name("f0"), None);
        assert_eq!(KeyCode::from_name("nope"), None);
    }

    #[test]
    fn test_same_key_ignores_shift_on_chars() {
        let plain = KeyEvent::char('G');
        let shifted = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert!(plain.same_key(&shifted));
        assert!(!plain.same_key(&KeyEvent::char('g')));
        assert!(!KeyEvent::char('u').same_key(&KeyEvent::with_ctrl(KeyCode::Char('u'))));

        let up = KeyEvent::key(KeyCode::Up);
        assert!(!up.same_key(&KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT)));
    }

    #[test]
    fn test_printable() {
        assert_eq!(KeyEvent::char('x').printable(), Some('x'));
        assert_eq!(
            KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT).printable(),
            Some('X')
        );
        assert_eq!(KeyEvent::key(KeyCode::Enter).printable(), None);
        assert_eq!(KeyEvent::char('\t').printable(), None);
    }

    #[test]
    fn test_key_event_from_char() {
        let event: KeyEvent = 'z'.into();
        assert_eq!(event.code, KeyCode::Char('z'));
    }
}
