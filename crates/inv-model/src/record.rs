//! Raw input records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a source row.
///
/// Rows read from a table without an explicit identifier column are keyed by
/// their 0-based data row position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Index(usize),
    Label(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

impl From<usize> for RowId {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for RowId {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

/// One input row: an ordered mapping of column name to raw cell text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    row_id: RowId,
    values: Vec<(String, String)>,
}

impl RawRecord {
    pub fn new(row_id: impl Into<RowId>, values: Vec<(String, String)>) -> Self {
        Self {
            row_id: row_id.into(),
            values,
        }
    }

    /// Builds a record from `(column, value)` string pairs.
    pub fn from_pairs<'a>(
        row_id: impl Into<RowId>,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let values = pairs
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self::new(row_id, values)
    }

    pub fn row_id(&self) -> &RowId {
        &self.row_id
    }

    /// Case-insensitive column lookup.
    ///
    /// `None` means the column does not exist; a blank cell is `Some("")`.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .map(|(_, value)| value.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> &[(String, String)] {
        &self.values
    }
}
