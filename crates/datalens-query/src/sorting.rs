//! Multi-column sorting
//!
//! A sort expression names one or more keys separated by `;`, each written as
//! `column[,asc|desc]` (`Salary,desc` or `Dept;Age,desc`). Sorting is stable
//! and null cells always go last, whatever the direction.

use std::cmp::Ordering;

use datalens_core::{ColumnIndex, DatalensError, Result, Row, Table, Value};

use crate::filter_types::{SortCriterion, SortDirection};

static NULL: Value = Value::Null;

/// A column to sort by with its position and direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortColumn {
    /// Column position in the row
    pub column_index: usize,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortColumn {
    pub fn new(column_index: usize, direction: SortDirection) -> Self {
        Self {
            column_index,
            direction,
        }
    }

    pub fn descending(column_index: usize) -> Self {
        Self::new(column_index, SortDirection::Descending)
    }
}

/// Where null cells are placed. Independent of the sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NullPosition {
    First,
    #[default]
    Last,
}

/// Multi-column sort configuration
#[derive(Debug, Clone, Default)]
pub struct MultiColumnSort {
    /// Columns to sort by, in priority order (first = highest priority)
    columns: Vec<SortColumn>,
    null_position: NullPosition,
}

impl MultiColumnSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_null_position(null_position: NullPosition) -> Self {
        Self {
            columns: Vec::new(),
            null_position,
        }
    }

    pub fn add_column(&mut self, column: SortColumn) {
        self.columns.push(column);
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Build a sort from parsed criteria, resolving each column by name.
    pub fn from_criteria(criteria: &[SortCriterion], index: &ColumnIndex) -> Result<Self> {
        let mut sort = Self::new();
        for criterion in criteria {
            let column = index.resolve(&criterion.column)?;
            tracing::debug!(
                column = %column.name,
                direction = criterion.direction.label(),
                "resolved sort key"
            );
            sort.add_column(SortColumn::new(column.position, criterion.direction));
        }
        Ok(sort)
    }

    /// Null placement is decided before the direction is applied, so it is
    /// never reversed.
    fn compare_values(&self, a: &Value, b: &Value, direction: SortDirection) -> Ordering {
        match (a.is_null(), b.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => match self.null_position {
                NullPosition::First => Ordering::Less,
                NullPosition::Last => Ordering::Greater,
            },
            (false, true) => match self.null_position {
                NullPosition::First => Ordering::Greater,
                NullPosition::Last => Ordering::Less,
            },
            (false, false) => {
                let ordering = compare_non_null_values(a, b);
                match direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }
        }
    }

    /// Compare two rows using all configured sort columns
    pub fn compare_rows(&self, row_a: &[Value], row_b: &[Value]) -> Ordering {
        for sort_col in &self.columns {
            let a = row_a.get(sort_col.column_index).unwrap_or(&NULL);
            let b = row_b.get(sort_col.column_index).unwrap_or(&NULL);

            let ordering = self.compare_values(a, b, sort_col.direction);
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Sort rows in place. Rows that compare equal keep their relative order.
    pub fn sort_rows(&self, rows: &mut [Row]) {
        if self.is_empty() {
            return;
        }
        rows.sort_by(|a, b| self.compare_rows(a, b));
    }
}

/// Rank of a value kind when kinds are mixed in one column
fn kind_rank(value: &Value) -> u8 {
    match value {
        Value::Int(_) | Value::Float(_) => 0,
        Value::Bool(_) => 1,
        Value::String(_) => 2,
        Value::Null => 3,
    }
}

/// Compare two non-null values: numbers, then booleans, then strings
fn compare_non_null_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::String(a), Value::String(b)) => a.cmp(b),

        // Cross-type numeric comparison (promote to f64)
        (a, b) if a.is_numeric() && b.is_numeric() => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => Ordering::Equal,
        },

        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

/// Split a sort expression into criteria, validating each direction.
pub fn parse_sort_expression(expr: &str) -> Result<Vec<SortCriterion>> {
    let criteria = expr
        .split(';')
        .filter(|key| !key.split(',').all(|part| part.trim().is_empty()))
        .map(SortCriterion::parse)
        .collect::<Result<Vec<_>>>()?;

    if criteria.is_empty() {
        return Err(DatalensError::EmptyExpression("Sort"));
    }
    Ok(criteria)
}

/// Apply a sort expression, returning a new, reordered table
pub fn run_sort(table: &Table, expr: &str) -> Result<Table> {
    let criteria = parse_sort_expression(expr)?;
    let sort = MultiColumnSort::from_criteria(&criteria, &table.column_index())?;

    let mut rows = table.rows().to_vec();
    sort.sort_rows(&mut rows);

    tracing::debug!(keys = criteria.len(), rows = rows.len(), "sort complete");
    Ok(table.with_rows(rows))
}
