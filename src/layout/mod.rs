//! Column layout: measuring cells, dividing width, wrapping text.
//!
//! The pipeline runs leaves first:
//!
//! 1. [`measure`] turns a cell's text into a [`ColumnDimension`].
//! 2. [`ColumnAllocator`] reduces every row's dimensions to one width per
//!    column under a total width budget.
//! 3. [`TextWrapper`] reflows each cell into lines of exactly its column's
//!    width.

mod allocate;
mod dimension;
mod wrap;

pub use allocate::{ColumnAllocator, WeightedRoundRobin, allocate_widths, reduce_columns};
pub use dimension::{ColumnDimension, MIN_CELL_WIDTH, measure};
pub use wrap::TextWrapper;
