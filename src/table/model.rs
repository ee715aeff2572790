//! The table: normalized data, per-row renderers, layout and focus.

use crate::config::TableOptions;
use crate::error::{Error, Result};
use crate::event::{LogLevel, TableEvent, emit_event, emit_log};
use crate::layout::{ColumnAllocator, ColumnDimension};
use crate::segment::{Line, Segment, push_lines};
use crate::style::{StyleClass, StyleTag};
use crate::table::data::DataSource;
use crate::table::row::{Row, RowRenderer};
use crate::unicode::{display_width, pad_to_width};
use std::ops::Range;

/// A focus transition request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
    /// Next row (wrapping) whose first column starts with the character.
    Find(char),
    /// Previous row (wrapping) whose first column starts with the character.
    FindBackward(char),
}

/// A completed focus move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusChange {
    pub from: usize,
    pub to: usize,
}

/// Rendered body lines plus the line range each row occupies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderedBody {
    pub lines: Vec<Line>,
    pub row_spans: Vec<Range<usize>>,
}

/// Rows of strings laid out into fixed-width columns.
///
/// Owns the header, every data row and the column allocator. Rendering is a
/// pure function of the target width and the current content; the only state
/// kept across calls is the allocator's per-width cache and each row's wrap
/// cache.
///
/// # Example
///
/// ```
/// use termtable::{DataSource, TableModel, TableOptions};
///
/// let data = DataSource::from_lists([["1", "Ada"], ["2", "Linus"]]);
/// let header = vec!["ID".to_string(), "Name".to_string()];
/// let mut table = TableModel::new(data, Some(header), TableOptions::default()).unwrap();
///
/// let lines = table.render_lines(20).unwrap();
/// assert_eq!(lines.len(), 2);
/// assert_eq!(table.focused_index(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct TableModel {
    columns: Vec<String>,
    header: Row,
    rows: Vec<Row>,
    renderer: RowRenderer,
    allocator: ColumnAllocator,
    options: TableOptions,
    focused: usize,
}

impl TableModel {
    /// Build a table, resolving the header and validating every row.
    pub fn new(
        data: DataSource,
        header: Option<Vec<String>>,
        options: TableOptions,
    ) -> Result<Self> {
        let normalized = data.normalize(header)?;
        let renderer = RowRenderer::new(options.padding, options.separator.clone());
        let header = Row::header(normalized.columns.clone());
        let mut rows: Vec<Row> = normalized
            .rows
            .into_iter()
            .enumerate()
            .map(|(i, cells)| Row::new(i, cells))
            .collect();
        if let Some(first) = rows.first_mut() {
            first.focus(options.show_cursor);
        }

        let mut table = Self {
            columns: normalized.columns,
            header,
            rows,
            renderer,
            allocator: ColumnAllocator::default(),
            options,
            focused: 0,
        };
        table.rebuild_allocator();
        emit_log(
            LogLevel::Debug,
            &format!(
                "built table with {} rows and {} columns",
                table.rows.len(),
                table.columns.len()
            ),
        );
        Ok(table)
    }

    fn rebuild_allocator(&mut self) {
        let matrix: Vec<Vec<ColumnDimension>> = std::iter::once(&self.header)
            .chain(&self.rows)
            .map(|row| self.renderer.dimensions(row))
            .collect();
        self.allocator = ColumnAllocator::new(&matrix);
    }

    /// Slot widths for a viewport `width`.
    pub fn widths(&mut self, width: usize) -> Result<Vec<usize>> {
        self.allocator.allocate(width)
    }

    /// Render the body as lines, recording which lines belong to each row.
    pub fn render_body(&mut self, width: usize) -> Result<RenderedBody> {
        let widths = self.widths(width)?;
        let mut body = RenderedBody::default();
        for row in &mut self.rows {
            let start = body.lines.len();
            body.lines.extend(self.renderer.render(row, &widths));
            body.row_spans.push(start..body.lines.len());
        }
        Ok(body)
    }

    /// Render the body as lines.
    pub fn render_lines(&mut self, width: usize) -> Result<Vec<Line>> {
        Ok(self.render_body(width)?.lines)
    }

    /// The whole body as a flat segment stream, every line terminated by a
    /// line-break segment.
    pub fn build_text(&mut self, width: usize) -> Result<Vec<Segment>> {
        let mut out = Vec::new();
        push_lines(&mut out, self.render_lines(width)?);
        Ok(out)
    }

    /// Header row lines.
    pub fn header_lines(&mut self, width: usize) -> Result<Vec<Line>> {
        let widths = self.widths(width)?;
        Ok(self.renderer.render(&mut self.header, &widths))
    }

    /// The header block: header lines then the rule, each terminated by a
    /// line-break segment.
    pub fn header(&mut self, width: usize) -> Result<Vec<Segment>> {
        let mut out = Vec::new();
        push_lines(&mut out, self.header_lines(width)?);
        out.extend(self.separator_text(width));
        Ok(out)
    }

    /// The rule drawn under the header, followed by a line break.
    ///
    /// Wide rule characters are repeated only as often as they fit; an odd
    /// leftover column is a space.
    #[must_use]
    pub fn separator_text(&self, width: usize) -> Vec<Segment> {
        let style = StyleTag::new(StyleClass::HeaderSeparator);
        let mut buf = [0; 4];
        let cell = display_width(self.options.header_rule.encode_utf8(&mut buf)).max(1);
        let rule: String = std::iter::repeat_n(self.options.header_rule, width / cell).collect();
        vec![
            Segment::new(style, pad_to_width(&rule, width)),
            Segment::line_break(style),
        ]
    }

    #[must_use]
    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Header labels.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    #[must_use]
    pub fn header_row(&self) -> &Row {
        &self.header
    }

    #[must_use]
    pub const fn focused_index(&self) -> usize {
        self.focused
    }

    /// Cells of the focused row.
    #[must_use]
    pub fn current_value(&self) -> &[String] {
        self.rows
            .get(self.focused)
            .map(Row::cells)
            .unwrap_or_default()
    }

    /// Replace one cell's text.
    ///
    /// Column dimensions are re-measured, so every cached width vector is
    /// dropped along with the row's wrapped lines.
    pub fn set_cell(&mut self, row: usize, column: usize, text: impl Into<String>) -> Result<()> {
        let total = self.rows.len();
        let columns = self.columns.len();
        let target = self.rows.get_mut(row).ok_or(Error::RowOutOfBounds {
            requested: row,
            total,
        })?;
        if !target.set_cell(column, text) {
            return Err(Error::ColumnOutOfBounds {
                requested: column,
                total: columns,
            });
        }
        self.rebuild_allocator();
        Ok(())
    }

    /// Move focus to `index`.
    ///
    /// Returns the change, or `None` if `index` is already focused.
    pub fn focus_row(&mut self, index: usize) -> Result<Option<FocusChange>> {
        if index >= self.rows.len() {
            return Err(Error::RowOutOfBounds {
                requested: index,
                total: self.rows.len(),
            });
        }
        Ok(self.move_focus(index))
    }

    fn move_focus(&mut self, to: usize) -> Option<FocusChange> {
        let from = self.focused;
        if from == to {
            return None;
        }
        self.rows[from].unfocus();
        self.rows[to].focus(self.options.show_cursor);
        self.focused = to;

        emit_log(LogLevel::Debug, &format!("focus {from} -> {to}"));
        emit_event(&TableEvent::Focus { from, to });
        Some(FocusChange { from, to })
    }

    /// Row index `command` would focus.
    #[must_use]
    pub fn target(&self, command: NavCommand) -> usize {
        let current = self.focused;
        let last = self.rows.len().saturating_sub(1);
        let page = self.options.page_size;
        match command {
            NavCommand::Up => current.saturating_sub(1),
            NavCommand::Down => (current + 1).min(last),
            NavCommand::PageUp => current.saturating_sub(page),
            NavCommand::PageDown => current.saturating_add(page).min(last),
            NavCommand::Top => 0,
            NavCommand::Bottom => last,
            NavCommand::Find(c) => self.find_forward(c).unwrap_or(current),
            NavCommand::FindBackward(c) => self.find_backward(c).unwrap_or(current),
        }
    }

    /// Apply a navigation command.
    pub fn apply(&mut self, command: NavCommand) -> Option<FocusChange> {
        let to = self.target(command);
        self.move_focus(to)
    }

    // Both scans wrap through the whole table, so the focused row itself is
    // reachable when nothing else matches.
    fn find_forward(&self, c: char) -> Option<usize> {
        let n = self.rows.len();
        (self.focused + 1..n)
            .chain(0..n)
            .find(|&i| self.rows[i].starts_with(c))
    }

    fn find_backward(&self, c: char) -> Option<usize> {
        let n = self.rows.len();
        (0..self.focused)
            .rev()
            .chain((0..n).rev())
            .find(|&i| self.rows[i].starts_with(c))
    }
}
