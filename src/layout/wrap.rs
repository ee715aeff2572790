//! Reflowing cell text into fixed-width lines.

use crate::unicode::{Grapheme, graphemes, pad_to_width};

/// Drawn in place of a single cluster wider than its column.
const OVERFLOW_MARK: &str = "…";

/// Wraps cell text into lines of an exact display width.
///
/// Every produced line is `padding` spaces, the trimmed text slice,
/// `padding` spaces, right-filled with spaces to the column width. Explicit
/// line breaks end a line early and are never rendered; two consecutive
/// breaks produce exactly one blank line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextWrapper {
    padding: usize,
}

impl Default for TextWrapper {
    fn default() -> Self {
        Self::new(1)
    }
}

impl TextWrapper {
    /// Create a wrapper reserving `padding` columns on each side.
    #[must_use]
    pub const fn new(padding: usize) -> Self {
        Self { padding }
    }

    /// Columns of text that fit on one line of a `width`-wide column.
    #[must_use]
    pub const fn chunk_width(&self, width: usize) -> usize {
        let chunk = width.saturating_sub(2 * self.padding);
        if chunk == 0 { 1 } else { chunk }
    }

    /// A line of spaces as wide as the column.
    #[must_use]
    pub fn blank_line(width: usize) -> String {
        " ".repeat(width)
    }

    /// Wrap `text` into lines exactly `width` columns wide.
    ///
    /// Empty text yields no lines.
    #[must_use]
    pub fn wrap(&self, text: &str, width: usize) -> Vec<String> {
        let gs = graphemes(text);
        let chunk = self.chunk_width(width);
        let mut lines = Vec::new();
        let mut i = 0;

        while i < gs.len() {
            let end = slice_end(&gs, i, chunk);
            let slice = &gs[i..end];
            let (content, next) = match slice.iter().position(Grapheme::is_break) {
                Some(0) => {
                    if gs.get(i + 1).is_some_and(Grapheme::is_break) {
                        lines.push(Self::blank_line(width));
                        i += 1;
                    }
                    i += 1;
                    continue;
                }
                // Stop at the break; the next pass starts on it and consumes it
                Some(offset) => (&slice[..offset], i + offset),
                None => (slice, end),
            };
            lines.push(self.render_line(content, chunk, width));
            i = next;
        }

        lines
    }

    fn render_line(&self, content: &[Grapheme<'_>], chunk: usize, width: usize) -> String {
        let joined: String = content.iter().map(|g| g.text).collect();
        let trimmed = joined.trim();
        let body = if content.len() == 1 && content[0].width > chunk {
            OVERFLOW_MARK
        } else {
            trimmed
        };
        let pad = " ".repeat(self.padding);
        pad_to_width(&format!("{pad}{body}{pad}"), width)
    }
}

/// End (exclusive) of the slice starting at `start` that fits in `chunk`
/// columns. Breaks and zero-width clusters count as one column so a slice
/// never runs past `chunk` clusters. At least one cluster is always taken.
fn slice_end(gs: &[Grapheme<'_>], start: usize, chunk: usize) -> usize {
    let mut used = 0;
    let mut end = start;
    while end < gs.len() {
        let cost = gs[end].width.max(1);
        if end > start && used + cost > chunk {
            break;
        }
        used += cost;
        end += 1;
    }
    end
}
