//! Table data, rows and the focusable table model.

mod data;
mod model;
mod row;

pub use data::{DataSource, FieldInfo, NormalizedData, Record, field_title, titleize};
pub use model::{FocusChange, NavCommand, RenderedBody, TableModel};
pub use row::{Row, RowRenderer, Slot, slot_count, slots};
