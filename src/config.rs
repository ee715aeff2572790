//! Table configuration.

use serde::Deserialize;

/// Options controlling layout and navigation.
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// let opts: termtable::TableOptions =
///     serde_json::from_str(r#"{"separator": " | ", "page_size": 20}"#).unwrap();
/// assert_eq!(opts.padding, 1);
/// assert_eq!(opts.page_size, 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Blank columns reserved on each side of cell content.
    pub padding: usize,
    /// Literal text placed between adjacent columns.
    pub separator: String,
    /// Rows moved by page-up / page-down.
    pub page_size: usize,
    /// Mark the focused row with a cursor-position marker.
    pub show_cursor: bool,
    /// Character repeated to draw the rule under the header.
    pub header_rule: char,
    /// Reserve a column for the scrollbar in [`TableView`](crate::view::TableView).
    pub show_scrollbar: bool,
    /// Show the header block in [`TableView`](crate::view::TableView).
    pub show_header: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            padding: 1,
            separator: " ".to_string(),
            page_size: 10,
            show_cursor: true,
            header_rule: '─',
            show_scrollbar: true,
            show_header: true,
        }
    }
}

impl TableOptions {
    #[must_use]
    pub fn with_padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    #[must_use]
    pub fn with_cursor(mut self, show_cursor: bool) -> Self {
        self.show_cursor = show_cursor;
        self
    }

    #[must_use]
    pub fn with_header_rule(mut self, rule: char) -> Self {
        self.header_rule = rule;
        self
    }

    #[must_use]
    pub fn with_scrollbar(mut self, show_scrollbar: bool) -> Self {
        self.show_scrollbar = show_scrollbar;
        self
    }

    #[must_use]
    pub fn with_header(mut self, show_header: bool) -> Self {
        self.show_header = show_header;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = TableOptions::default();
        assert_eq!(opts.padding, 1);
        assert_eq!(opts.separator, " ");
        assert_eq!(opts.page_size, 10);
        assert!(opts.show_cursor);
        assert_eq!(opts.header_rule, '─');
    }

    #[test]
    fn test_deserialize_partial() {
        let opts: TableOptions =
            serde_json::from_str(r#"{"header_rule": "=", "show_scrollbar": false}"#).unwrap();
        assert_eq!(opts.header_rule, '=');
        assert!(!opts.show_scrollbar);
        assert_eq!(opts.separator, " ");
    }

    #[test]
    fn test_builders() {
        let opts = TableOptions::default()
            .with_separator("│")
            .with_page_size(5)
            .with_cursor(false);
        assert_eq!(opts.separator, "│");
        assert_eq!(opts.page_size, 5);
        assert!(!opts.show_cursor);
    }
}
