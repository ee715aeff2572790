//! `termtable` - Table layout for terminal user interfaces
//!
//! Lays out rows of strings into fixed-width columns that fit a terminal
//! width, wraps cell text on grapheme boundaries, and tracks a focused row
//! driven by vi-style key bindings. Output is a flat stream of styled
//! [`Segment`]s that any character-grid painter can draw.
//!
//! # Example
//!
//! ```
//! use termtable::{DataSource, TableModel, TableOptions};
//!
//! let data = DataSource::from_maps([
//!     vec![("name", "Ada Lovelace"), ("field", "mathematics")],
//!     vec![("name", "Alan Turing"), ("field", "computing")],
//! ]);
//! let mut table = TableModel::new(data, None, TableOptions::default())?;
//!
//! assert_eq!(table.columns(), ["Name", "Field"]);
//! let body = table.render_lines(40)?;
//! assert_eq!(body.len(), 2);
//! # Ok::<(), termtable::Error>(())
//! ```

#![allow(clippy::module_name_repetitions)] // TableModel in table, etc.
#![allow(clippy::missing_errors_doc)] // Errors are documented on the Error enum
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::struct_excessive_bools)] // Options carry several toggles
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::needless_collect)] // Collect for assertions is clear
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer

pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod layout;
pub mod segment;
pub mod style;
pub mod table;
pub mod theme;
pub mod unicode;
pub mod view;

// Re-export core types at crate root
pub use color::Rgba;
pub use config::TableOptions;
pub use error::{Error, Result};
pub use event::{
    LogLevel, TableEvent, clear_event_callback, clear_log_callback, emit_event, emit_log,
    set_event_callback, set_log_callback,
};
pub use layout::{ColumnAllocator, ColumnDimension, TextWrapper};
pub use segment::{LINE_BREAK, Line, Segment};
pub use style::{Style, StyleClass, StyleTag, TextAttributes};
pub use theme::TableTheme;
pub use unicode::{WidthMethod, set_width_method};

// Re-export table and input types
pub use input::{Action, KeyCode, KeyEvent, KeyMap, KeyModifiers, NavigationController};
pub use table::{DataSource, FieldInfo, FocusChange, NavCommand, Record, Row, TableModel};
pub use view::{Frame, TableView};
