//! Table data sources and header derivation.
//!
//! Three row shapes are accepted: plain lists of cells (a header must be
//! supplied), string-keyed mappings (header from the keys) and typed records
//! (header from the record schema). The shape is resolved once, when the
//! table is built, into a list of column names plus rows of cell strings.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::Value;

/// A named, titled field of a [`Record`] schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldInfo {
    pub name: String,
    pub title: String,
}

impl FieldInfo {
    /// Field whose title is derived from its name (`"first_name"` → `"First Name"`).
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let title = field_title(&name);
        Self { name, title }
    }

    /// Field with an explicit title.
    #[must_use]
    pub fn titled(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
        }
    }
}

/// A typed row exposing a schema of named fields.
///
/// ```
/// use termtable::table::{FieldInfo, Record};
///
/// struct User { id: u32, name: String }
///
/// impl Record for User {
///     fn fields() -> Vec<FieldInfo> {
///         vec![FieldInfo::titled("id", "ID"), FieldInfo::new("name")]
///     }
///     fn values(&self) -> Vec<String> {
///         vec![self.id.to_string(), self.name.clone()]
///     }
/// }
/// ```
pub trait Record {
    /// Schema of the record, in column order.
    fn fields() -> Vec<FieldInfo>;
    /// Cell values, one per field, in the same order.
    fn values(&self) -> Vec<String>;
}

/// Rows of a table before normalisation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Ordered lists of cells. Needs an explicit header.
    Lists(Vec<Vec<String>>),
    /// Ordered key/value pairs per row. Header comes from the first row's
    /// keys, and every row is read by key in that order.
    Maps(Vec<Vec<(String, String)>>),
    /// Typed records. Header comes from the schema titles.
    Records {
        fields: Vec<FieldInfo>,
        rows: Vec<Vec<String>>,
    },
}

/// Column names plus rows of cells, every row already stringified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataSource {
    /// Rows given as lists of displayable values.
    pub fn from_lists<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: ToString,
    {
        Self::Lists(
            rows.into_iter()
                .map(|row| row.into_iter().map(|cell| cell.to_string()).collect())
                .collect(),
        )
    }

    /// Rows given as ordered key/value pairs.
    pub fn from_maps<R, K, V>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        Self::Maps(
            rows.into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|(k, v)| (k.into(), v.to_string()))
                        .collect()
                })
                .collect(),
        )
    }

    /// Rows given as typed records.
    pub fn from_records<'a, R: Record + 'a>(records: impl IntoIterator<Item = &'a R>) -> Self {
        Self::Records {
            fields: R::fields(),
            rows: records.into_iter().map(R::values).collect(),
        }
    }

    /// Detect the row shape of JSON values.
    ///
    /// Arrays become [`DataSource::Lists`], objects [`DataSource::Maps`].
    /// Scalars, or a mix of arrays and objects, are rejected.
    pub fn from_json(rows: Vec<Value>) -> Result<Self> {
        let lists = match rows.first() {
            None => return Err(Error::EmptyInput),
            Some(Value::Array(_)) => true,
            Some(Value::Object(_)) => false,
            Some(other) => return Err(shape_error(0, other)),
        };
        if lists {
            rows
                .into_iter()
                .enumerate()
                .map(|(i, row)| match row {
                    Value::Array(cells) => Ok(cells.iter().map(cell_text).collect::<Vec<_>>()),
                    other => Err(shape_error(i, &other)),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::Lists)
        } else {
            rows
                .into_iter()
                .enumerate()
                .map(|(i, row)| match row {
                    Value::Object(map) => Ok(map
                        .into_iter()
                        .map(|(k, v)| {
                            let text = cell_text(&v);
                            (k, text)
                        })
                        .collect::<Vec<_>>()),
                    other => Err(shape_error(i, &other)),
                })
                .collect::<Result<Vec<_>>>()
                .map(Self::Maps)
        }
    }

    /// Serialize typed rows and detect their shape with [`from_json`](Self::from_json).
    ///
    /// Structs serialize to objects, so field names become titleized columns.
    pub fn from_serialize<T: Serialize>(rows: &[T]) -> Result<Self> {
        let values = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|err| Error::UnsupportedDataShape {
                reason: err.to_string(),
            })?;
        Self::from_json(values)
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Lists(rows) | Self::Records { rows, .. } => rows.len(),
            Self::Maps(rows) => rows.len(),
        }
    }

    /// Whether there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolve the header and flatten every row to cell strings.
    ///
    /// An explicit `header` always wins over a derived one.
    pub fn normalize(self, header: Option<Vec<String>>) -> Result<NormalizedData> {
        if self.is_empty() {
            return Err(Error::EmptyInput);
        }
        let (derived, rows) = match self {
            Self::Lists(rows) => (None, rows),
            Self::Maps(rows) => {
                let keys: Vec<String> = rows[0].iter().map(|(k, _)| k.clone()).collect();
                let titles: Vec<String> = keys.iter().map(|k| titleize(k)).collect();
                let cells = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, row)| cells_by_key(i, row, &keys, &titles))
                    .collect::<Result<Vec<_>>>()?;
                (Some(titles), cells)
            }
            Self::Records { fields, rows } => {
                (Some(fields.into_iter().map(|f| f.title).collect()), rows)
            }
        };
        let columns = header.or(derived).ok_or(Error::MissingHeader)?;
        if columns.is_empty() {
            return Err(Error::NoColumns);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != columns.len() {
                return Err(Error::RowLengthMismatch {
                    row,
                    row_len: cells.len(),
                    header: columns,
                });
            }
        }
        Ok(NormalizedData { columns, rows })
    }
}

/// Cells of one mapping row, in column-key order.
fn cells_by_key(
    row: usize,
    mut entries: Vec<(String, String)>,
    keys: &[String],
    titles: &[String],
) -> Result<Vec<String>> {
    if entries.len() != keys.len() {
        return Err(Error::RowLengthMismatch {
            row,
            row_len: entries.len(),
            header: titles.to_vec(),
        });
    }
    keys.iter()
        .map(|key| {
            let at = entries
                .iter()
                .position(|(k, _)| k == key)
                .ok_or_else(|| Error::MissingKey {
                    row,
                    key: key.clone(),
                })?;
            Ok(std::mem::take(&mut entries[at].1))
        })
        .collect()
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn shape_error(row: usize, value: &Value) -> Error {
    let kind = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    };
    Error::UnsupportedDataShape {
        reason: format!("row {row} is a {kind}"),
    }
}

/// Title-case every word: a letter is upper-cased when it follows a
/// non-letter and lower-cased otherwise.
#[must_use]
pub fn titleize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = c.is_alphabetic();
    }
    out
}

/// Default title for a field name: underscores become spaces, then titleized.
#[must_use]
pub fn field_title(name: &str) -> String {
    titleize(name.replace('_', " ").trim())
}
