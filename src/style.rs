//! Style tags carried by rendered segments, and the concrete styles they
//! resolve to.
//!
//! - [`StyleTag`]: what the layout engine attaches to every segment. It is a
//!   plain struct; the renderer-specific class string is produced only at the
//!   paint boundary by [`StyleTag::class_string`].
//! - [`Style`]: colors plus [`TextAttributes`], produced by a
//!   [`TableTheme`](crate::theme::TableTheme).

use crate::color::Rgba;
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Text rendering attributes (bold, italic, underline, etc.).
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD          = 0x01;
        /// Dim/decreased intensity.
        const DIM           = 0x02;
        /// Italic (not widely supported).
        const ITALIC        = 0x04;
        /// Underlined text.
        const UNDERLINE     = 0x08;
        /// Blinking text (rarely supported).
        const BLINK         = 0x10;
        /// Swapped foreground/background.
        const INVERSE       = 0x20;
        /// Hidden/invisible text.
        const HIDDEN        = 0x40;
        /// Strikethrough text.
        const STRIKETHROUGH = 0x80;
    }
}

/// Complete text style.
///
/// `None` for colors means "use terminal default".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color (None = terminal default).
    pub fg: Option<Rgba>,
    /// Background color (None = terminal default).
    pub bg: Option<Rgba>,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Empty style with no colors or attributes.
    pub const NONE: Self = Self {
        fg: None,
        bg: None,
        attributes: TextAttributes::empty(),
    };

    /// Return a new style with the specified foreground color.
    #[must_use]
    pub const fn with_fg(self, color: Rgba) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    /// Return a new style with the specified background color.
    #[must_use]
    pub const fn with_bg(self, color: Rgba) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    /// Overlay `other` on top of `self`: colors set in `other` win,
    /// attributes are OR-ed.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attributes: self.attributes | other.attributes,
        }
    }

    /// Parse a style definition such as `"bg:#002b36 #657b83 bold"`.
    ///
    /// Bare colors set the foreground, `fg:`/`bg:` set either side explicitly
    /// and attribute names add attributes. Returns `None` on any unknown word.
    #[must_use]
    pub fn parse(definition: &str) -> Option<Self> {
        let mut style = Self::NONE;
        for word in definition.split_whitespace() {
            if let Some(color) = word.strip_prefix("bg:") {
                style.bg = Some(Rgba::from_hex(color)?);
            } else if let Some(color) = word.strip_prefix("fg:") {
                style.fg = Some(Rgba::from_hex(color)?);
            } else if word.starts_with('#') {
                style.fg = Some(Rgba::from_hex(word)?);
            } else {
                style.attributes |= match word {
                    "bold" => TextAttributes::BOLD,
                    "dim" => TextAttributes::DIM,
                    "italic" => TextAttributes::ITALIC,
                    "underline" => TextAttributes::UNDERLINE,
                    "blink" => TextAttributes::BLINK,
                    "reverse" => TextAttributes::INVERSE,
                    "hidden" => TextAttributes::HIDDEN,
                    "strike" => TextAttributes::STRIKETHROUGH,
                    _ => return None,
                };
            }
        }
        Some(style)
    }
}

/// Base style class of a rendered region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StyleClass {
    /// Odd data rows.
    #[default]
    Row,
    /// Even data rows (the first row is even).
    RowAlternate,
    /// Header row.
    Header,
    /// Rule under the header.
    HeaderSeparator,
    /// Scrollbar track.
    ScrollbarBackground,
    /// Scrollbar thumb.
    ScrollbarButton,
}

impl StyleClass {
    /// Dotted class name, e.g. `row.alternate`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::RowAlternate => "row.alternate",
            Self::Header => "header",
            Self::HeaderSeparator => "header.separator",
            Self::ScrollbarBackground => "scrollbar.background",
            Self::ScrollbarButton => "scrollbar.button",
        }
    }

    /// Base class of a data row by position.
    #[must_use]
    pub const fn for_row(index: usize) -> Self {
        if index % 2 == 0 {
            Self::RowAlternate
        } else {
            Self::Row
        }
    }
}

/// Style attached to every rendered segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleTag {
    pub class: StyleClass,
    pub focused: bool,
    pub show_cursor: bool,
}

impl StyleTag {
    /// Unfocused tag for a class.
    #[must_use]
    pub const fn new(class: StyleClass) -> Self {
        Self {
            class,
            focused: false,
            show_cursor: false,
        }
    }

    /// Copy of this tag with the focus markers set.
    #[must_use]
    pub const fn with_focus(self, show_cursor: bool) -> Self {
        Self {
            focused: true,
            show_cursor,
            ..self
        }
    }

    /// Copy of this tag with the focus markers cleared.
    #[must_use]
    pub const fn without_focus(self) -> Self {
        Self::new(self.class)
    }

    /// Renderer string, e.g. `class:row.alternate,focused,[SetCursorPosition]`.
    #[must_use]
    pub fn class_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class:{}", self.class.name())?;
        if self.focused {
            f.write_str(",focused")?;
        }
        if self.show_cursor {
            f.write_str(",[SetCursorPosition]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_classes_alternate() {
        assert_eq!(StyleClass::for_row(0), StyleClass::RowAlternate);
        assert_eq!(StyleClass::for_row(1), StyleClass::Row);
        assert_eq!(StyleClass::for_row(2), StyleClass::RowAlternate);
    }

    #[test]
    fn test_class_string() {
        let tag = StyleTag::new(StyleClass::RowAlternate);
        assert_eq!(tag.class_string(), "class:row.alternate");
        assert_eq!(
            tag.with_focus(true).class_string(),
            "class:row.alternate,focused,[SetCursorPosition]"
        );
        assert_eq!(tag.with_focus(false).class_string(), "class:row.alternate,focused");
        assert_eq!(tag.with_focus(true).without_focus(), tag);
    }

    #[test]
    fn test_parse_style() {
        let style = Style::parse("bg:#002b36 #657b83 bold").unwrap();
        assert_eq!(style.bg, Some(Rgba::rgb(0x00, 0x2b, 0x36)));
        assert_eq!(style.fg, Some(Rgba::rgb(0x65, 0x7b, 0x83)));
        assert!(style.attributes.contains(TextAttributes::BOLD));

        assert_eq!(Style::parse(""), Some(Style::NONE));
        assert_eq!(Style::parse("sparkly"), None);
        assert_eq!(Style::parse("bg:#nothex"), None);
    }

    #[test]
    fn test_merge_prefers_overlay() {
        let base = Style::parse("bg:#002b36 #657b83").unwrap();
        let over = Style::parse("bg:#073642 underline").unwrap();
        let merged = base.merge(over);
        assert_eq!(merged.bg, Some(Rgba::rgb(0x07, 0x36, 0x42)));
        assert_eq!(merged.fg, Some(Rgba::rgb(0x65, 0x7b, 0x83)));
        assert_eq!(merged.attributes, TextAttributes::UNDERLINE);
    }
}
