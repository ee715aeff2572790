//! Grapheme cluster segmentation of cell text.

use crate::unicode::width::display_width;
use unicode_segmentation::UnicodeSegmentation;

/// One grapheme cluster of cell text together with its column width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grapheme<'a> {
    pub text: &'a str,
    pub width: usize,
}

impl Grapheme<'_> {
    /// Whether this cluster is an explicit line break.
    #[must_use]
    pub fn is_break(&self) -> bool {
        is_line_break(self.text)
    }
}

/// Split a string into grapheme clusters with their display widths.
///
/// `"\r\n"` is a single cluster and counts as one line break.
#[must_use]
pub fn graphemes(s: &str) -> Vec<Grapheme<'_>> {
    s.graphemes(true)
        .map(|text| Grapheme {
            text,
            width: if is_line_break(text) {
                0
            } else {
                display_width(text)
            },
        })
        .collect()
}

/// Check whether a grapheme cluster is a line break.
#[must_use]
pub fn is_line_break(g: &str) -> bool {
    matches!(g, "\n" | "\r\n" | "\r")
}

/// Split text on explicit line breaks.
///
/// Unlike [`str::lines`], a trailing break yields a trailing empty line and
/// the empty string yields a single empty line.
pub fn split_lines(s: &str) -> impl Iterator<Item = &str> {
    s.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}
