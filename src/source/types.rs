//! Row model

use serde::Serialize;
use std::collections::BTreeMap;

/// Column whose value identifies a form submission
pub const ROW_ID_FIELD: &str = "Timestamp";

/// One record of the sheet export, keyed by column header
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Row {
    columns: BTreeMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value, replacing any previous one
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.columns.insert(column.into(), value.into());
    }

    /// Add a column, builder style
    pub fn with(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(column, value);
        self
    }

    /// Raw value of a column
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    /// Trimmed value of the first listed column that has non-blank content
    pub fn first_non_empty(&self, columns: &[&str]) -> Option<&str> {
        columns
            .iter()
            .filter_map(|column| self.get(column))
            .map(str::trim)
            .find(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Dedup key into the send log
    ///
    /// The `Timestamp` column verbatim when it is non-empty, otherwise the
    /// whole row as JSON with sorted keys. Two rows with identical contents
    /// and no timestamp share an id.
    pub fn row_id(&self) -> String {
        match self.get(ROW_ID_FIELD) {
            Some(ts) if !ts.is_empty() => ts.to_string(),
            _ => self.canonical_json(),
        }
    }

    fn canonical_json(&self) -> String {
        // A map of strings always serializes
        serde_json::to_string(&self.columns).unwrap_or_else(|_| format!("{:?}", self.columns))
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}
