//! Unicode helpers for measuring and slicing cell text.
//!
//! Cell text is measured in terminal columns and sliced on grapheme cluster
//! boundaries, so wide characters and combining marks never get split.

mod grapheme;
mod width;

pub use grapheme::{Grapheme, graphemes, is_line_break, split_lines};
pub use width::{
    WidthMethod, display_width, display_width_with_method, pad_to_width, set_width_method,
    width_method,
};
