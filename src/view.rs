//! A scrolling viewport over a table.
//!
//! [`TableView`] stacks the header block above a vertically scrolled body
//! and an optional one-column scrollbar:
//!
//! ```text
//! ┌──────────────────────┐
//! │ header lines         │
//! │ ──────────────────── │  rule
//! │ body line          ▐ │
//! │ body line          ▐ │  scrollbar
//! │ body line            │
//! └──────────────────────┘
//! ```

use crate::error::Result;
use crate::input::{KeyEvent, KeyMap, NavigationController};
use crate::segment::{Line, Segment, line_text, push_lines, split_lines};
use crate::style::{StyleClass, StyleTag};
use crate::table::{FocusChange, TableModel};
use std::ops::Range;

/// A rendered screenful: at most the requested number of lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub lines: Vec<Line>,
}

impl Frame {
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Plain text of every line.
    #[must_use]
    pub fn text_lines(&self) -> Vec<String> {
        self.lines.iter().map(|line| line_text(line)).collect()
    }

    /// Flatten into a segment stream with line-break segments.
    #[must_use]
    pub fn into_segments(self) -> Vec<Segment> {
        let mut out = Vec::new();
        push_lines(&mut out, self.lines);
        out
    }
}

/// Vertical scroll position of the body, in lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct ScrollState {
    offset: usize,
}

impl ScrollState {
    /// Scroll the minimal amount that shows `span` in a `visible`-line
    /// viewport. A span taller than the viewport is shown from its top.
    fn ensure_visible(&mut self, span: &Range<usize>, visible: usize) {
        if span.start < self.offset {
            self.offset = span.start;
        } else if span.end > self.offset + visible {
            self.offset = span.end.saturating_sub(visible).min(span.start);
        }
    }

    fn clamp(&mut self, total: usize, visible: usize) {
        self.offset = self.offset.min(total.saturating_sub(visible));
    }
}

/// Thumb rows of a `track`-line scrollbar over `total` lines scrolled to
/// `offset`.
fn thumb(track: usize, total: usize, offset: usize) -> Range<usize> {
    if total <= track || track == 0 {
        return 0..track;
    }
    let size = ((track * track + total / 2) / total).clamp(1, track);
    let max_offset = total - track;
    let start = (offset * (track - size) + max_offset / 2) / max_offset;
    start..start + size
}

/// A table with a header, a scrolled body and keyboard navigation.
#[derive(Clone, Debug)]
pub struct TableView {
    table: TableModel,
    navigation: NavigationController,
    scroll: ScrollState,
}

impl TableView {
    /// Wrap a table using the default key bindings.
    #[must_use]
    pub fn new(table: TableModel) -> Self {
        Self::with_keymap(table, KeyMap::default())
    }

    #[must_use]
    pub fn with_keymap(table: TableModel, keymap: KeyMap) -> Self {
        Self {
            table,
            navigation: NavigationController::new(keymap),
            scroll: ScrollState::default(),
        }
    }

    #[must_use]
    pub fn table(&self) -> &TableModel {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut TableModel {
        &mut self.table
    }

    /// First visible body line.
    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset
    }

    /// Route a key press through the navigation bindings.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FocusChange> {
        self.navigation.handle(key, &mut self.table)
    }

    /// Render into a `width` by `height` area.
    ///
    /// The body scrolls so the focused row is fully visible whenever the
    /// viewport is tall enough to hold it.
    pub fn render(&mut self, width: usize, height: usize) -> Result<Frame> {
        let scrollbar = self.table.options().show_scrollbar;
        let table_width = if scrollbar {
            width.saturating_sub(1)
        } else {
            width
        };

        let mut lines = Vec::new();
        if self.table.options().show_header {
            let header_style = StyleTag::new(StyleClass::Header);
            for mut line in self.table.header_lines(table_width)? {
                if scrollbar {
                    line.push(Segment::new(header_style, " "));
                }
                lines.push(line);
            }
            lines.extend(split_lines(&self.table.separator_text(width)));
        }
        lines.truncate(height);

        let visible = height - lines.len();
        let body = self.table.render_body(table_width)?;
        let total = body.lines.len();
        if let Some(span) = body.row_spans.get(self.table.focused_index()) {
            self.scroll.ensure_visible(span, visible);
        }
        self.scroll.clamp(total, visible);

        let offset = self.scroll.offset;
        let end = total.min(offset + visible);
        let bar = thumb(visible, total, offset);
        for (i, mut line) in body.lines.into_iter().enumerate().take(end).skip(offset) {
            if scrollbar {
                let class = if bar.contains(&(i - offset)) {
                    StyleClass::ScrollbarButton
                } else {
                    StyleClass::ScrollbarBackground
                };
                line.push(Segment::new(StyleTag::new(class), " "));
            }
            lines.push(line);
        }

        Ok(Frame { lines })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableOptions;
    use crate::input::KeyCode;
    use crate::table::DataSource;
    use crate::unicode::display_width;

    fn view(rows: usize, options: TableOptions) -> TableView {
        let data = DataSource::from_lists((0..rows).map(|i| vec![format!("row{i:02}")]));
        TableView::new(TableModel::new(data, Some(vec!["Name".into()]), options).unwrap())
    }

    #[test]
    fn test_thumb_geometry() {
        assert_eq!(thumb(4, 3, 0), 0..4);
        assert_eq!(thumb(4, 20, 0), 0..1);
        assert_eq!(thumb(4, 20, 16), 3..4);
        assert_eq!(thumb(10, 20, 5), 3..8);
        assert_eq!(thumb(0, 20, 0), 0..0);
    }

    #[test]
    fn test_frame_layout() {
        let mut v = view(20, TableOptions::default());
        let frame = v.render(12, 6).unwrap();
        assert_eq!(frame.height(), 6);
        let text = frame.text_lines();
        assert!(text[0].starts_with(" Name"));
        assert_eq!(text[1], "─".repeat(12));
        assert!(text[2].starts_with(" row00"));
        for line in &text {
            assert_eq!(display_width(line), 12);
        }
        let bar = frame.lines[2].last().unwrap();
        assert_eq!(bar.style.class, StyleClass::ScrollbarButton);
        let track = frame.lines[5].last().unwrap();
        assert_eq!(track.style.class, StyleClass::ScrollbarBackground);
    }

    #[test]
    fn test_scrolls_to_focused_row() {
        let mut v = view(20, TableOptions::default());
        v.handle_key(KeyEvent::char('G'));
        let frame = v.render(12, 6).unwrap();
        assert_eq!(v.scroll_offset(), 16);
        let text = frame.text_lines();
        assert!(text[2].starts_with(" row16"));
        assert!(text[5].starts_with(" row19"));
        assert_eq!(
            frame.lines[5].last().unwrap().style.class,
            StyleClass::ScrollbarButton
        );

        // Moving up inside the viewport does not scroll
        v.handle_key(KeyEvent::key(KeyCode::Up));
        v.render(12, 6).unwrap();
        assert_eq!(v.scroll_offset(), 16);

        v.handle_key(KeyEvent::char('g'));
        v.handle_key(KeyEvent::char('g'));
        v.render(12, 6).unwrap();
        assert_eq!(v.scroll_offset(), 0);
    }

    #[test]
    fn test_short_body_is_not_padded() {
        let mut v = view(2, TableOptions::default());
        let frame = v.render(12, 10).unwrap();
        assert_eq!(frame.height(), 4);
        assert_eq!(
            frame.lines[3].last().unwrap().style.class,
            StyleClass::ScrollbarButton
        );
    }

    #[test]
    fn test_without_header_or_scrollbar() {
        let options = TableOptions::default()
            .with_header(false)
            .with_scrollbar(false);
        let mut v = view(5, options);
        let frame = v.render(10, 3).unwrap();
        let text = frame.text_lines();
        assert_eq!(text.len(), 3);
        assert!(text[0].starts_with(" row00"));
        assert_eq!(display_width(&text[0]), 10);
    }

    #[test]
    fn test_tiny_height_keeps_header_only() {
        let mut v = view(5, TableOptions::default());
        let frame = v.render(12, 1).unwrap();
        assert_eq!(frame.height(), 1);
        assert!(frame.text_lines()[0].starts_with(" Name"));
    }

    #[test]
    fn test_tall_focused_row_shown_from_top() {
        let data = DataSource::from_lists([["a"], ["one\ntwo\nthree\nfour"]]);
        let options = TableOptions::default().with_header(false);
        let mut v = TableView::new(TableModel::new(data, Some(vec!["N".into()]), options).unwrap());
        v.handle_key(KeyEvent::char('j'));
        let frame = v.render(10, 2).unwrap();
        assert_eq!(v.scroll_offset(), 1);
        assert!(frame.text_lines()[0].starts_with(" one"));
    }

    #[test]
    fn test_insufficient_width_propagates() {
        let mut v = view(3, TableOptions::default());
        assert!(v.render(3, 5).is_err());
    }

    #[test]
    fn test_frame_segments() {
        let mut v = view(1, TableOptions::default());
        let segments = v.render(12, 5).unwrap().into_segments();
        assert_eq!(segments.iter().filter(|s| s.is_line_break()).count(), 3);
    }
}
