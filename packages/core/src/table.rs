//! A small column-ordered table of JSON values.
//!
//! [`Table`] is the shape node and edge attribute data takes on its way into
//! and out of Cytoscape: a list of named columns and a list of rows, each row
//! holding exactly one cell per column. It converts to and from the
//! "records" form (`[{"col": value, ...}, ...]`) that CyREST table endpoints
//! speak.

use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised by [`Table`] construction and editing.
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("row has {got} cells but the table has {expected} columns")]
    RowWidth { expected: usize, got: usize },

    #[error("column {0:?} already exists")]
    DuplicateColumn(String),

    #[error("column {column:?} has {got} values but the table has {expected} rows")]
    ColumnLength {
        column: String,
        expected: usize,
        got: usize,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create an empty table with the given column names.
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a table from record objects.
    ///
    /// Columns appear in first-seen order across all records. A record that
    /// lacks a column gets `null` in that cell.
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a Map<String, Value>>) -> Self {
        let records: Vec<&Map<String, Value>> = records.into_iter().collect();
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|c| record.get(c).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }

    /// Convert back to record objects, one per row.
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect::<Map<String, Value>>()
            })
            .collect()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All cells of one column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }

    /// The column rendered as strings: JSON strings verbatim, everything else
    /// via its JSON text. `null` cells become empty strings.
    pub fn column_strings(&self, name: &str) -> Option<Vec<String>> {
        self.column(name)
            .map(|cells| cells.into_iter().map(cell_to_string).collect())
    }

    pub fn push_row(&mut self, row: Vec<Value>) -> Result<(), TableError> {
        if row.len() != self.columns.len() {
            return Err(TableError::RowWidth {
                expected: self.columns.len(),
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append a column. `values` must have one entry per existing row.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Vec<Value>,
    ) -> Result<Self, TableError> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(TableError::DuplicateColumn(name));
        }
        if values.len() != self.rows.len() {
            return Err(TableError::ColumnLength {
                column: name,
                expected: self.rows.len(),
                got: values.len(),
            });
        }
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        self.columns.push(name);
        Ok(self)
    }

    /// Replace an existing column's values, or append it when absent.
    pub fn set_column(&mut self, name: &str, values: Vec<Value>) -> Result<(), TableError> {
        if values.len() != self.rows.len() {
            return Err(TableError::ColumnLength {
                column: name.to_string(),
                expected: self.rows.len(),
                got: values.len(),
            });
        }
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
                self.columns.push(name.to_string());
            }
        }
        Ok(())
    }

    /// Remove a column. Dropping a column that does not exist is a no-op.
    pub fn drop_column(mut self, name: &str) -> Self {
        if let Some(idx) = self.column_index(name) {
            self.columns.remove(idx);
            for row in &mut self.rows {
                row.remove(idx);
            }
        }
        self
    }

    /// Keep only the named columns, in the order given. Unknown names are
    /// skipped.
    pub fn select(&self, names: &[&str]) -> Self {
        let picked: Vec<(usize, &str)> = names
            .iter()
            .filter_map(|n| self.column_index(n).map(|i| (i, *n)))
            .collect();
        Self {
            columns: picked.iter().map(|(_, n)| n.to_string()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| picked.iter().map(|(i, _)| row[*i].clone()).collect())
                .collect(),
        }
    }

    /// Keep only rows for which `keep` returns true.
    pub fn filter_rows(&self, mut keep: impl FnMut(&[Value]) -> bool) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|r| keep(r)).cloned().collect(),
        }
    }

    /// Look up a single cell.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[idx])
    }
}

/// Render one cell as a plain string.
pub fn cell_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
