//! Display width calculation for terminal cells.

use std::sync::atomic::{AtomicU8, Ordering};
use unicode_width::UnicodeWidthStr;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// POSIX-like wcwidth: ambiguous width = 1.
    #[default]
    WcWidth,
    /// Unicode East Asian Width: ambiguous width = 2.
    Unicode,
}

const WIDTH_METHOD_WCWIDTH: u8 = 0;
const WIDTH_METHOD_UNICODE: u8 = 1;

static WIDTH_METHOD: AtomicU8 = AtomicU8::new(WIDTH_METHOD_WCWIDTH);

/// Set the global width method used when measuring cells.
pub fn set_width_method(method: WidthMethod) {
    let value = match method {
        WidthMethod::WcWidth => WIDTH_METHOD_WCWIDTH,
        WidthMethod::Unicode => WIDTH_METHOD_UNICODE,
    };
    WIDTH_METHOD.store(value, Ordering::Relaxed);
}

/// Get the global width method.
#[must_use]
pub fn width_method() -> WidthMethod {
    match WIDTH_METHOD.load(Ordering::Relaxed) {
        WIDTH_METHOD_UNICODE => WidthMethod::Unicode,
        _ => WidthMethod::WcWidth,
    }
}

/// Display width of a string in terminal columns (global method).
#[must_use]
pub fn display_width(s: &str) -> usize {
    // ASCII printable text is one column per byte
    if s.bytes().all(|b| (0x20..0x7f).contains(&b)) {
        return s.len();
    }
    display_width_with_method(s, width_method())
}

/// Display width of a string using a specific method.
#[must_use]
pub fn display_width_with_method(s: &str, method: WidthMethod) -> usize {
    match method {
        WidthMethod::WcWidth => UnicodeWidthStr::width(s),
        WidthMethod::Unicode => UnicodeWidthStr::width_cjk(s),
    }
}

/// Left-justify `s` with spaces until it spans `width` columns.
///
/// Text already wider than `width` is returned unchanged.
#[must_use]
pub fn pad_to_width(s: &str, width: usize) -> String {
    let used = display_width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(used));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(display_width("漢字"), 4);
    }

    #[test]
    fn test_width_methods() {
        // Circled digit one is ambiguous width
        assert_eq!(display_width_with_method("①", WidthMethod::WcWidth), 1);
        assert_eq!(display_width_with_method("①", WidthMethod::Unicode), 2);
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(pad_to_width(" ab ", 7), " ab    ");
        assert_eq!(pad_to_width("漢", 4), "漢  ");
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }
}
