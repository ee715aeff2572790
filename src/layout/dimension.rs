//! Per-cell space requirements.

use crate::unicode::{display_width, split_lines};

/// Smallest width a content column can shrink to.
pub const MIN_CELL_WIDTH: usize = 3;

/// Space requirement of one cell or pseudo-column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColumnDimension {
    /// Width the column can never go below.
    pub min: usize,
    /// Width at which the content fits without wrapping.
    pub preferred: usize,
    /// Share of spare width the column receives while growing. Zero never grows.
    pub weight: usize,
}

impl ColumnDimension {
    /// Dimension with explicit values; `preferred` is raised to `min` if lower.
    #[must_use]
    pub fn new(min: usize, preferred: usize, weight: usize) -> Self {
        Self {
            min,
            preferred: preferred.max(min),
            weight,
        }
    }

    /// A fixed-width slot (separator, margin) that never grows.
    #[must_use]
    pub const fn fixed(width: usize) -> Self {
        Self {
            min: width,
            preferred: width,
            weight: 0,
        }
    }

    /// Component-wise maximum: the dimension satisfying both inputs.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self {
            min: self.min.max(other.min),
            preferred: self.preferred.max(other.preferred),
            weight: self.weight.max(other.weight),
        }
    }
}

/// Measure a cell's text.
///
/// The preferred width is the widest explicit line plus `padding` columns on
/// each side. The minimum is [`MIN_CELL_WIDTH`], raised to fit both
/// paddings plus one column of text.
#[must_use]
pub fn measure(text: &str, padding: usize) -> ColumnDimension {
    let longest = split_lines(text).map(display_width).max().unwrap_or(0);
    let min = MIN_CELL_WIDTH.max(2 * padding + 1);
    ColumnDimension::new(min, longest + 2 * padding, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_single_line() {
        let dim = measure("hello", 1);
        assert_eq!(dim, ColumnDimension::new(3, 7, 1));
    }

    #[test]
    fn test_measure_uses_longest_line() {
        let dim = measure("hello\nbeautiful world", 1);
        assert_eq!(dim.preferred, 17);
        assert_eq!(dim.min, MIN_CELL_WIDTH);
    }

    #[test]
    fn test_measure_empty_is_clamped_to_min() {
        let dim = measure("", 1);
        assert_eq!(dim.preferred, MIN_CELL_WIDTH);
        assert_eq!(dim.weight, 1);
    }

    #[test]
    fn test_min_fits_padding() {
        assert_eq!(measure("x", 0).min, MIN_CELL_WIDTH);
        assert_eq!(measure("x", 2).min, 5);
        assert_eq!(measure("abcdef", 3), ColumnDimension::new(7, 12, 1));
    }

    #[test]
    fn test_measure_wide_characters() {
        assert_eq!(measure("漢字", 1).preferred, 6);
    }

    #[test]
    fn test_fixed_never_grows() {
        let sep = ColumnDimension::fixed(3);
        assert_eq!((sep.min, sep.preferred, sep.weight), (3, 3, 0));
    }

    #[test]
    fn test_max_is_componentwise() {
        let a = ColumnDimension::new(3, 10, 0);
        let b = ColumnDimension::new(5, 6, 2);
        assert_eq!(a.max(b), ColumnDimension::new(5, 10, 2));
    }
}
