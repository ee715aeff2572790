//! Key dispatch for table focus.

use crate::event::{LogLevel, emit_log};
use crate::input::keyboard::KeyEvent;
use crate::input::keymap::{Binding, KeyMap, KeyPattern};
use crate::table::{FocusChange, NavCommand, TableModel};

/// Turns key presses into focus transitions.
///
/// Multi-key bindings such as `g g` buffer the keys pressed so far. A key
/// that continues no binding discards the whole buffer, itself included,
/// without touching the table.
#[derive(Clone, Debug, Default)]
pub struct NavigationController {
    keymap: KeyMap,
    pending: Vec<KeyEvent>,
}

enum Resolution {
    Complete(Option<NavCommand>),
    Pending,
    NoMatch,
}

impl NavigationController {
    #[must_use]
    pub fn new(keymap: KeyMap) -> Self {
        Self {
            keymap,
            pending: Vec::new(),
        }
    }

    #[must_use]
    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    /// Whether a multi-key sequence is partially entered.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drop any partially entered sequence.
    pub fn reset(&mut self) {
        self.pending.clear();
    }

    /// Feed one key and return the command it completes, if any.
    pub fn resolve(&mut self, key: KeyEvent) -> Option<NavCommand> {
        self.pending.push(key);
        match self.lookup() {
            Resolution::Complete(command) => {
                self.pending.clear();
                command
            }
            Resolution::Pending => None,
            Resolution::NoMatch => {
                if self.pending.len() > 1 {
                    emit_log(
                        LogLevel::Debug,
                        &format!("discarding key sequence {:?}", self.pending),
                    );
                }
                self.pending.clear();
                None
            }
        }
    }

    /// Feed one key and apply the resulting command to `table`.
    pub fn handle(&mut self, key: KeyEvent, table: &mut TableModel) -> Option<FocusChange> {
        let command = self.resolve(key)?;
        table.apply(command)
    }

    fn lookup(&self) -> Resolution {
        let mut complete = None;
        let mut longer = false;
        for binding in self.keymap.bindings() {
            if !self.is_prefix_of(binding) {
                continue;
            }
            if binding.keys.len() == self.pending.len() {
                complete.get_or_insert(binding);
            } else {
                longer = true;
            }
        }
        match complete {
            Some(binding) if !longer => {
                Resolution::Complete(binding.action.command(self.captured(binding)))
            }
            _ if longer => Resolution::Pending,
            _ => Resolution::NoMatch,
        }
    }

    fn is_prefix_of(&self, binding: &Binding) -> bool {
        binding.keys.len() >= self.pending.len()
            && binding
                .keys
                .iter()
                .zip(&self.pending)
                .all(|(pattern, key)| pattern.matches(key))
    }

    fn captured(&self, binding: &Binding) -> Option<char> {
        binding
            .keys
            .iter()
            .zip(&self.pending)
            .find_map(|(pattern, key)| match pattern {
                KeyPattern::AnyChar => key.printable(),
                KeyPattern::Key(_) => None,
            })
    }
}
