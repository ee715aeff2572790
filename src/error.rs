//! Error types for table construction and rendering.

use thiserror::Error;

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for table operations.
///
/// Construction errors are raised eagerly by [`TableModel::new`], layout
/// errors at render entry. Nothing is retried internally.
///
/// [`TableModel::new`]: crate::table::TableModel::new
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The data source has no rows.
    #[error("Please introduce some data to print.")]
    EmptyInput,
    /// Rows are plain lists and no header was given.
    #[error("You need to specify a header for the table")]
    MissingHeader,
    /// Rows are neither lists, mappings nor records.
    #[error(
        "Table data format not supported, please enter a list of lists, dictionaries or records: {reason}"
    )]
    UnsupportedDataShape { reason: String },
    /// The header resolved to zero columns.
    #[error("The table needs at least one column")]
    NoColumns,
    /// A row does not have one cell per header column.
    #[error(
        "Row {row} length ({row_len}) is different from the columns length ({}): {header:?}",
        .header.len()
    )]
    RowLengthMismatch {
        row: usize,
        row_len: usize,
        header: Vec<String>,
    },
    /// A mapping row lacks one of the keys that name the columns.
    #[error("Row {row} has no value for the {key:?} column")]
    MissingKey { row: usize, key: String },
    /// The minimum footprint of all columns exceeds the available width.
    #[error(
        "There is not enough space to print all the columns: need {required}, have {available}"
    )]
    InsufficientWidth { required: usize, available: usize },
    /// Row index past the end of the table.
    #[error("row {requested} out of bounds for table with {total} rows")]
    RowOutOfBounds { requested: usize, total: usize },
    /// Column index past the end of the header.
    #[error("column {requested} out of bounds for table with {total} columns")]
    ColumnOutOfBounds { requested: usize, total: usize },
    /// A key binding could not be parsed.
    #[error("invalid key notation: {0}")]
    InvalidKeyNotation(String),
}
