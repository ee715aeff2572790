//! Class-to-style mapping applied at the paint boundary.

use crate::style::{Style, StyleClass, StyleTag};
use std::collections::HashMap;

/// Maps dotted style class names to concrete [`Style`]s.
///
/// Lookups walk the class hierarchy: `row.alternate` is `row` overlaid with
/// `row.alternate`. Focus is applied last through the `focused` entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableTheme {
    entries: HashMap<String, Style>,
}

impl TableTheme {
    /// An empty theme where everything renders with terminal defaults.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The solarized palette the table ships with.
    #[must_use]
    pub fn solarized() -> Self {
        let mut theme = Self::empty();
        for (class, definition) in [
            ("row", "bg:#002b36 #657b83"),
            ("focused", "bg:#657b83 #002b36"),
            ("row.alternate", "bg:#073642"),
            ("header", "bg:#002b36 #6c71c4"),
            ("header.separator", "#657b83"),
            ("scrollbar.background", "bg:#002b36"),
            ("scrollbar.button", "bg:#657b83"),
        ] {
            if let Some(style) = Style::parse(definition) {
                theme.set(class, style);
            }
        }
        theme
    }

    /// Set the style of a class.
    pub fn set(&mut self, class: &str, style: Style) {
        self.entries.insert(class.to_string(), style);
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, class: &str, style: Style) -> Self {
        self.set(class, style);
        self
    }

    /// Style registered for exactly this class name.
    #[must_use]
    pub fn get(&self, class: &str) -> Option<&Style> {
        self.entries.get(class)
    }

    /// Resolve a class through its dotted ancestors.
    #[must_use]
    pub fn class_style(&self, class: StyleClass) -> Style {
        let name = class.name();
        let mut style = Style::NONE;
        let mut end = 0;
        for part in name.split('.') {
            end += part.len();
            if let Some(entry) = self.entries.get(&name[..end]) {
                style = style.merge(*entry);
            }
            end += 1;
        }
        style
    }

    /// Resolve the full style of a segment tag.
    #[must_use]
    pub fn resolve(&self, tag: &StyleTag) -> Style {
        let style = self.class_style(tag.class);
        match self.entries.get("focused") {
            Some(focused) if tag.focused => style.merge(*focused),
            _ => style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_alternate_inherits_row_foreground() {
        let theme = TableTheme::solarized();
        let style = theme.class_style(StyleClass::RowAlternate);
        assert_eq!(style.bg, Some(Rgba::rgb(0x07, 0x36, 0x42)));
        assert_eq!(style.fg, Some(Rgba::rgb(0x65, 0x7b, 0x83)));
    }

    #[test]
    fn test_focus_overrides_row() {
        let theme = TableTheme::solarized();
        let tag = StyleTag::new(StyleClass::Row).with_focus(true);
        let style = theme.resolve(&tag);
        assert_eq!(style.bg, Some(Rgba::rgb(0x65, 0x7b, 0x83)));
        assert_eq!(style.fg, Some(Rgba::rgb(0x00, 0x2b, 0x36)));
    }

    #[test]
    fn test_header_separator_inherits_header_background() {
        let theme = TableTheme::solarized();
        let style = theme.class_style(StyleClass::HeaderSeparator);
        assert_eq!(style.bg, Some(Rgba::rgb(0x00, 0x2b, 0x36)));
        assert_eq!(style.fg, Some(Rgba::rgb(0x65, 0x7b, 0x83)));
    }

    #[test]
    fn test_empty_theme_is_default() {
        let theme = TableTheme::empty();
        assert_eq!(
            theme.resolve(&StyleTag::new(StyleClass::Header)),
            Style::NONE
        );
        let custom = theme.with("header", Style::NONE.with_fg(Rgba::WHITE));
        assert_eq!(custom.get("header").and_then(|s| s.fg), Some(Rgba::WHITE));
    }
}
