//! Rows and the renderer that turns a row into equal-height lines.
//!
//! A rendered row is a sequence of slots: every data cell, a separator
//! between adjacent cells and a trailing margin that soaks up spare width:
//!
//! ```text
//! cell │ sep │ cell │ sep │ cell │ margin
//! ```

use crate::layout::{ColumnDimension, TextWrapper, measure};
use crate::segment::{Line, Segment};
use crate::style::{StyleClass, StyleTag};
use crate::unicode::{display_width, pad_to_width};
use std::hash::{Hash, Hasher};

/// One slot of a rendered row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Data cell at a column index.
    Cell(usize),
    /// Separator between two cells.
    Separator,
    /// Trailing margin.
    Margin,
}

/// Slot layout for a row of `columns` cells.
pub fn slots(columns: usize) -> impl Iterator<Item = Slot> {
    (0..columns)
        .flat_map(move |c| {
            let sep = (c + 1 < columns).then_some(Slot::Separator);
            std::iter::once(Slot::Cell(c)).chain(sep)
        })
        .chain(std::iter::once(Slot::Margin))
}

/// Number of slots for a row of `columns` cells.
#[must_use]
pub const fn slot_count(columns: usize) -> usize {
    2 * columns
}

#[derive(Clone, Debug)]
struct WrapCache {
    widths: Vec<usize>,
    slots: Vec<Vec<String>>,
}

/// A table row: cells plus a stable identity and the current style.
///
/// Equality and hashing use only the identity assigned at construction.
#[derive(Clone, Debug)]
pub struct Row {
    id: usize,
    cells: Vec<String>,
    style: StyleTag,
    cache: Option<WrapCache>,
}

impl PartialEq for Row {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Row {}

impl Hash for Row {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Row {
    /// A data row at position `id`, styled by its parity.
    #[must_use]
    pub fn new(id: usize, cells: Vec<String>) -> Self {
        Self {
            id,
            cells,
            style: StyleTag::new(StyleClass::for_row(id)),
            cache: None,
        }
    }

    /// The header row. It is never focused.
    #[must_use]
    pub fn header(columns: Vec<String>) -> Self {
        Self {
            id: usize::MAX,
            cells: columns,
            style: StyleTag::new(StyleClass::Header),
            cache: None,
        }
    }

    /// Stable identity.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    #[must_use]
    pub const fn style(&self) -> StyleTag {
        self.style
    }

    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.style.focused
    }

    /// Mark this row focused.
    pub fn focus(&mut self, show_cursor: bool) {
        self.style = self.style.with_focus(show_cursor);
    }

    /// Clear the focus markers.
    pub fn unfocus(&mut self) {
        self.style = self.style.without_focus();
    }

    /// Replace the text of one cell, dropping cached wrapping.
    ///
    /// Returns `false` if `column` is out of range.
    pub fn set_cell(&mut self, column: usize, text: impl Into<String>) -> bool {
        let Some(cell) = self.cells.get_mut(column) else {
            return false;
        };
        *cell = text.into();
        self.cache = None;
        true
    }

    /// Whether the first cell starts with `c`, ignoring case.
    #[must_use]
    pub fn starts_with(&self, c: char) -> bool {
        let needle: String = c.to_lowercase().collect();
        self.cells
            .first()
            .is_some_and(|text| text.to_lowercase().starts_with(&needle))
    }
}

/// Measures and renders rows against a width vector.
#[derive(Clone, Debug)]
pub struct RowRenderer {
    wrapper: TextWrapper,
    padding: usize,
    separator: String,
}

impl RowRenderer {
    #[must_use]
    pub fn new(padding: usize, separator: impl Into<String>) -> Self {
        Self {
            wrapper: TextWrapper::new(padding),
            padding,
            separator: separator.into(),
        }
    }

    /// Dimension of every slot of a row.
    #[must_use]
    pub fn dimensions(&self, row: &Row) -> Vec<ColumnDimension> {
        let separator = display_width(&self.separator);
        slots(row.cells.len())
            .map(|slot| match slot {
                Slot::Cell(c) => measure(&row.cells[c], self.padding),
                Slot::Separator => ColumnDimension::fixed(separator),
                Slot::Margin => ColumnDimension::fixed(0),
            })
            .collect()
    }

    /// Wrapped lines of every slot, all padded to the row's height.
    ///
    /// A pure function of the cells and `widths`; the result is cached on the
    /// row until either changes.
    pub fn wrap_slots<'r>(&self, row: &'r mut Row, widths: &[usize]) -> &'r [Vec<String>] {
        let fresh = row.cache.as_ref().is_none_or(|cache| cache.widths != widths);
        if fresh {
            let slots = self.wrap_uncached(&row.cells, widths);
            row.cache = Some(WrapCache {
                widths: widths.to_vec(),
                slots,
            });
        }
        row.cache
            .as_ref()
            .map(|cache| cache.slots.as_slice())
            .unwrap_or_default()
    }

    fn wrap_uncached(&self, cells: &[String], widths: &[usize]) -> Vec<Vec<String>> {
        let mut wrapped: Vec<Vec<String>> = slots(cells.len())
            .zip(widths)
            .map(|(slot, &width)| match slot {
                Slot::Cell(c) => {
                    let lines = self.wrapper.wrap(&cells[c], width);
                    if lines.is_empty() {
                        vec![TextWrapper::blank_line(width)]
                    } else {
                        lines
                    }
                }
                Slot::Separator => vec![pad_to_width(&self.separator, width)],
                Slot::Margin => vec![TextWrapper::blank_line(width)],
            })
            .collect();

        let height = wrapped.iter().map(Vec::len).max().unwrap_or(0);
        for (lines, &width) in wrapped.iter_mut().zip(widths) {
            lines.resize_with(height, || TextWrapper::blank_line(width));
        }
        wrapped
    }

    /// Render a row into lines of segments, one segment per slot, all
    /// tagged with the row's current style.
    pub fn render(&self, row: &mut Row, widths: &[usize]) -> Vec<Line> {
        let style = row.style;
        let wrapped = self.wrap_slots(row, widths);
        let height = wrapped.first().map_or(0, Vec::len);
        (0..height)
            .map(|i| {
                wrapped
                    .iter()
                    .map(|lines| Segment::new(style, lines[i].clone()))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::line_text;

    fn row(cells: &[&str]) -> Row {
        Row::new(0, cells.iter().map(|c| (*c).to_string()).collect())
    }

    #[test]
    fn test_slot_layout() {
        let layout: Vec<Slot> = slots(3).collect();
        assert_eq!(
            layout,
            vec![
                Slot::Cell(0),
                Slot::Separator,
                Slot::Cell(1),
                Slot::Separator,
                Slot::Cell(2),
                Slot::Margin,
            ]
        );
        assert_eq!(slots(1).count(), slot_count(1));
        assert_eq!(slots(4).count(), slot_count(4));
    }

    #[test]
    fn test_dimensions_include_pseudo_columns() {
        let renderer = RowRenderer::new(1, " | ");
        let dims = renderer.dimensions(&row(&["id", "name"]));
        assert_eq!(
            dims,
            vec![
                ColumnDimension::new(3, 4, 1),
                ColumnDimension::fixed(3),
                ColumnDimension::new(3, 6, 1),
                ColumnDimension::fixed(0),
            ]
        );
    }

    #[test]
    fn test_cells_padded_to_tallest() {
        let renderer = RowRenderer::new(1, " ");
        let mut r = row(&["cell", "hello\nworld", "cell"]);
        let lines = renderer.render(&mut r, &[6, 1, 7, 1, 6, 5]);
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), " cell   hello   cell      ");
        assert_eq!(
            line_text(&lines[1]),
            format!("{} world {}", " ".repeat(7), " ".repeat(13))
        );
        for line in &lines {
            assert_eq!(line.len(), 6);
            assert!(line.iter().all(|s| s.style == r.style()));
        }
    }

    #[test]
    fn test_empty_cell_keeps_row_height() {
        let renderer = RowRenderer::new(1, " ");
        let mut r = row(&["", "x"]);
        let lines = renderer.render(&mut r, &[3, 1, 3, 0]);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0][0].text, "   ");
        assert_eq!(lines[0][3].text, "");
    }

    #[test]
    fn test_wrap_cache_keyed_by_widths() {
        let renderer = RowRenderer::new(1, " ");
        let mut r = row(&["abcdef"]);
        let narrow = renderer.wrap_slots(&mut r, &[5, 0]).to_vec();
        assert_eq!(narrow[0], vec![" abc ", " def "]);
        let again = renderer.wrap_slots(&mut r, &[5, 0]).to_vec();
        assert_eq!(narrow, again);
        let wide = renderer.wrap_slots(&mut r, &[8, 0]).to_vec();
        assert_eq!(wide[0], vec![" abcdef "]);
    }

    #[test]
    fn test_set_cell_invalidates_cache() {
        let renderer = RowRenderer::new(1, " ");
        let mut r = row(&["abc"]);
        assert_eq!(renderer.wrap_slots(&mut r, &[5, 0])[0], vec![" abc "]);
        assert!(r.set_cell(0, "xyz"));
        assert_eq!(renderer.wrap_slots(&mut r, &[5, 0])[0], vec![" xyz "]);
        assert!(!r.set_cell(4, "nope"));
    }

    #[test]
    fn test_focus_styles() {
        let mut r = Row::new(2, vec!["a".into()]);
        assert_eq!(r.style().class, StyleClass::RowAlternate);
        r.focus(true);
        assert!(r.is_focused());
        assert_eq!(
            r.style().class_string(),
            "class:row.alternate,focused,[SetCursorPosition]"
        );
        r.unfocus();
        assert_eq!(r.style().class_string(), "class:row.alternate");
    }

    #[test]
    fn test_identity_equality() {
        let a = Row::new(1, vec!["x".into()]);
        let mut b = Row::new(1, vec!["y".into()]);
        b.focus(false);
        assert_eq!(a, b);
        assert_ne!(a, Row::new(2, vec!["x".into()]));
    }

    #[test]
    fn test_starts_with_ignores_case() {
        assert!(row(&["Xwebhe", "b"]).starts_with('x'));
        assert!(row(&["xwebhe"]).starts_with('X'));
        assert!(!row(&["awebhe"]).starts_with('x'));
    }
}
