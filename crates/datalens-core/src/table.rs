//! In-memory tables and column lookup

use std::collections::HashMap;
use std::ops::Range;

use crate::error::{DatalensError, Result};
use crate::types::Value;

/// A row of cells, positionally aligned with the table's columns
pub type Row = Vec<Value>;

static NULL: Value = Value::Null;

/// An ordered collection of rows sharing one column list.
///
/// Tables are values: every transform produces a new `Table` and never
/// mutates its input.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create a table. Rows shorter than the column list are padded with
    /// `Null`, longer rows are truncated.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Value::Null);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Create a table without rows
    pub fn empty(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Column names in display order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows in order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a single cell
    pub fn get(&self, row: usize, column: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Iterate over one column's cells in row order
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &Value> + '_ {
        self.rows.iter().map(move |row| row.get(column).unwrap_or(&NULL))
    }

    /// Build the case-insensitive lookup for this table's columns
    pub fn column_index(&self) -> ColumnIndex {
        ColumnIndex::new(&self.columns)
    }

    /// Keep the rows whose mask entry is `true`, in their original order.
    ///
    /// The mask must be aligned 1:1 with the rows; missing entries count as `false`.
    pub fn select(&self, mask: &[bool]) -> Table {
        debug_assert_eq!(mask.len(), self.rows.len(), "selection mask misaligned");
        let rows = self
            .rows
            .iter()
            .zip(mask)
            .filter(|(_, keep)| **keep)
            .map(|(row, _)| row.clone())
            .collect();
        Table {
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Copy a contiguous range of rows, clipped to the rows available
    pub fn slice(&self, range: Range<usize>) -> Table {
        let end = range.end.min(self.rows.len());
        let start = range.start.min(end);
        Table {
            columns: self.columns.clone(),
            rows: self.rows[start..end].to_vec(),
        }
    }

    /// The first `n` rows
    pub fn head(&self, n: usize) -> Table {
        self.slice(0..n)
    }

    /// A table with the same columns and the given rows
    pub fn with_rows(&self, rows: Vec<Row>) -> Table {
        Table::new(self.columns.clone(), rows)
    }

    /// Infer the type of one column from its cells
    pub fn column_type(&self, column: usize) -> ColumnType {
        ColumnType::infer(self.column_values(column))
    }

    /// Column names paired with their inferred types
    pub fn dtypes(&self) -> Vec<(&str, ColumnType)> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.as_str(), self.column_type(idx)))
            .collect()
    }
}

/// A column resolved against a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// Position in the table's column list
    pub position: usize,
    /// Canonical (original-case) name
    pub name: String,
}

/// Case-insensitive column name lookup.
///
/// Built from a table's columns; filtering and sorting never change the
/// column list, so an index stays valid across those operations.
#[derive(Debug, Clone, Default)]
pub struct ColumnIndex {
    columns: Vec<String>,
    by_lowercase: HashMap<String, usize>,
}

impl ColumnIndex {
    /// Build the index. When two columns differ only in case the first one
    /// wins the case-insensitive slot; the other stays reachable by exact name.
    pub fn new(columns: &[String]) -> Self {
        let mut by_lowercase = HashMap::with_capacity(columns.len());
        for (position, name) in columns.iter().enumerate() {
            by_lowercase.entry(name.to_lowercase()).or_insert(position);
        }
        Self {
            columns: columns.to_vec(),
            by_lowercase,
        }
    }

    /// Resolve a user-typed column name to the table's column
    pub fn resolve(&self, name: &str) -> Result<ResolvedColumn> {
        let position = self
            .columns
            .iter()
            .position(|c| c == name)
            .or_else(|| self.by_lowercase.get(&name.to_lowercase()).copied());

        match position {
            Some(position) => Ok(ResolvedColumn {
                position,
                name: self.columns[position].clone(),
            }),
            None => Err(DatalensError::UnknownColumn {
                column: name.to_string(),
                available: self.columns.join(", "),
            }),
        }
    }

    /// Number of indexed columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the index has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// The type of a column, inferred from the cells it holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Every cell is null (or there are no rows)
    Null,
    Bool,
    Int,
    /// Floats, possibly mixed with ints
    Float,
    String,
    /// More than one incompatible kind of cell
    Mixed,
}

impl ColumnType {
    /// Infer a column type. Nulls are ignored; ints and floats unify to `Float`.
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a Value>) -> Self {
        values
            .into_iter()
            .fold(ColumnType::Null, |acc, value| acc.unify(Self::of(value)))
    }

    fn of(value: &Value) -> Self {
        match value {
            Value::Null => ColumnType::Null,
            Value::Bool(_) => ColumnType::Bool,
            Value::Int(_) => ColumnType::Int,
            Value::Float(_) => ColumnType::Float,
            Value::String(_) => ColumnType::String,
        }
    }

    fn unify(self, other: Self) -> Self {
        match (self, other) {
            (a, b) if a == b => a,
            (ColumnType::Null, b) => b,
            (a, ColumnType::Null) => a,
            (ColumnType::Int, ColumnType::Float) | (ColumnType::Float, ColumnType::Int) => {
                ColumnType::Float
            }
            _ => ColumnType::Mixed,
        }
    }

    /// Check if the column holds only numbers
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Int | ColumnType::Float)
    }

    /// Get the display label
    pub fn label(&self) -> &'static str {
        match self {
            ColumnType::Null => "null",
            ColumnType::Bool => "bool",
            ColumnType::Int => "int",
            ColumnType::Float => "float",
            ColumnType::String => "string",
            ColumnType::Mixed => "mixed",
        }
    }
}

impl std::fmt::Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
