//! Styled text segments: the output unit of the layout engine.

use crate::style::StyleTag;

/// Text of a line-break segment.
pub const LINE_BREAK: &str = "\n";

/// A run of text sharing one style tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Style applied to the text.
    pub style: StyleTag,
    /// The text. Never contains a line break unless this is a break segment.
    pub text: String,
}

/// One painted line: segments in column order.
pub type Line = Vec<Segment>;

impl Segment {
    /// Create a new segment.
    #[must_use]
    pub fn new(style: StyleTag, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }

    /// A line-break segment carrying `style`.
    #[must_use]
    pub fn line_break(style: StyleTag) -> Self {
        Self::new(style, LINE_BREAK)
    }

    /// Whether this segment terminates a line.
    #[must_use]
    pub fn is_line_break(&self) -> bool {
        self.text == LINE_BREAK
    }
}

/// Append `lines` to `out`, each followed by a line-break segment.
pub fn push_lines(out: &mut Vec<Segment>, lines: Vec<Line>) {
    for line in lines {
        let style = line.first().map(|s| s.style).unwrap_or_default();
        out.extend(line);
        out.push(Segment::line_break(style));
    }
}

/// Split a flat segment stream back into lines at break segments.
///
/// Segments after the last break are dropped, matching how a painter treats
/// an unterminated line.
#[must_use]
pub fn split_lines(segments: &[Segment]) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current = Vec::new();
    for segment in segments {
        if segment.is_line_break() {
            lines.push(std::mem::take(&mut current));
        } else {
            current.push(segment.clone());
        }
    }
    lines
}

/// Concatenated text of a line.
#[must_use]
pub fn line_text(line: &[Segment]) -> String {
    line.iter().map(|s| s.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleClass;

    #[test]
    fn test_push_and_split_lines() {
        let tag = StyleTag::new(StyleClass::Row);
        let mut out = Vec::new();
        push_lines(
            &mut out,
            vec![
                vec![Segment::new(tag, " a "), Segment::new(tag, " ")],
                vec![Segment::new(tag, " b "), Segment::new(tag, " ")],
            ],
        );
        assert_eq!(out.len(), 6);
        assert!(out[2].is_line_break());
        assert_eq!(out[2].style, tag);

        let lines = split_lines(&out);
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[1]), " b  ");
    }

    #[test]
    fn test_unterminated_tail_dropped() {
        let tag = StyleTag::default();
        let segs = vec![Segment::new(tag, "x")];
        assert!(split_lines(&segs).is_empty());
    }
}
