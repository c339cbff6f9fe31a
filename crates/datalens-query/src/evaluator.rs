//! Per-condition row selection
//!
//! [`evaluate`] turns one resolved condition into a [`SelectionMask`]. It never
//! fails: a comparison that cannot be made for a cell simply does not select it.

use std::cmp::Ordering;

use datalens_core::{Table, Value};

use crate::filter_types::FilterOperator;

/// One flag per row, aligned with the table's row order; `true` keeps the row
pub type SelectionMask = Vec<bool>;

/// A cell or literal interpreted as a number
#[derive(Debug, Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(Number::Int(*v)),
            Value::Float(v) => Some(Number::Float(*v)),
            Value::String(s) => Self::parse(s),
            Value::Null | Value::Bool(_) => None,
        }
    }

    fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        text.parse::<i64>()
            .map(Number::Int)
            .ok()
            .or_else(|| text.parse::<f64>().ok().map(Number::Float))
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// Ints compare exactly; anything involving a float compares as f64.
    /// NaN has no ordering.
    fn compare(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

/// Compute the selection mask for `column <operator> value`.
///
/// `column` is a position already resolved against `table`.
pub fn evaluate(
    table: &Table,
    column: usize,
    operator: FilterOperator,
    value: &Value,
) -> SelectionMask {
    if operator == FilterOperator::Contains {
        return contains_mask(table, column, value);
    }

    match value {
        Value::Null => null_mask(table, column, operator),
        Value::Int(_) | Value::Float(_) => match Number::from_value(value) {
            Some(literal) => numeric_mask(table, column, operator, literal),
            None => vec![false; table.row_count()],
        },
        Value::String(text) if table.column_type(column).is_numeric() => {
            match Number::parse(text) {
                Some(literal) => numeric_mask(table, column, operator, literal),
                None => vec![false; table.row_count()],
            }
        }
        Value::Bool(_) if table.column_type(column).is_numeric() => {
            vec![false; table.row_count()]
        }
        Value::String(_) | Value::Bool(_) => text_mask(table, column, operator, value),
    }
}

fn contains_mask(table: &Table, column: usize, value: &Value) -> SelectionMask {
    let needle = value.to_string().to_lowercase();
    table
        .column_values(column)
        .map(|cell| !cell.is_null() && cell.to_string().to_lowercase().contains(&needle))
        .collect()
}

fn null_mask(table: &Table, column: usize, operator: FilterOperator) -> SelectionMask {
    table
        .column_values(column)
        .map(|cell| match operator {
            FilterOperator::Equal => cell.is_null(),
            FilterOperator::NotEqual => !cell.is_null(),
            _ => false,
        })
        .collect()
}

fn numeric_mask(
    table: &Table,
    column: usize,
    operator: FilterOperator,
    literal: Number,
) -> SelectionMask {
    table
        .column_values(column)
        .map(|cell| {
            Number::from_value(cell)
                .and_then(|n| n.compare(literal))
                .is_some_and(|ordering| operator.accepts(ordering))
        })
        .collect()
}

fn text_mask(
    table: &Table,
    column: usize,
    operator: FilterOperator,
    value: &Value,
) -> SelectionMask {
    let literal = value.to_string();
    table
        .column_values(column)
        .map(|cell| {
            !cell.is_null() && operator.accepts(cell.to_string().as_str().cmp(literal.as_str()))
        })
        .collect()
}
