//! Keyboard input and table navigation.
//!
//! The host owns the event loop. It converts terminal input into
//! [`KeyEvent`]s and feeds them to a [`NavigationController`], which resolves
//! them against a [`KeyMap`] and moves focus on a
//! [`TableModel`](crate::table::TableModel).

mod keyboard;
mod keymap;
mod navigation;

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
pub use keymap::{Action, Binding, KeyMap, KeyPattern, parse_key, parse_key_sequence};
pub use navigation::NavigationController;
