//! Common test fixtures

#![allow(dead_code)]

use datalens_core::{Table, Value};

/// Build a table from column names and rows
pub fn table(columns: &[&str], rows: Vec<Vec<Value>>) -> Table {
    Table::new(columns.iter().map(|c| c.to_string()).collect(), rows)
}

/// Age/Dept staff table used by the worked examples
pub fn staff() -> Table {
    table(
        &["Age", "Dept"],
        vec![
            vec![Value::Int(20), "HR".into()],
            vec![Value::Int(30), "IT".into()],
            vec![Value::Int(40), "IT".into()],
        ],
    )
}

/// Name-only table for substring searches
pub fn names() -> Table {
    table(
        &["Name"],
        vec![vec!["Ali".into()], vec!["Bob".into()], vec!["Khalid".into()]],
    )
}

/// A wider table with mixed kinds and nulls
pub fn employees() -> Table {
    table(
        &["Name", "Age", "Department", "Salary", "Remote"],
        vec![
            vec!["Ali".into(), Value::Int(28), "IT".into(), Value::Float(5200.0), Value::Bool(true)],
            vec!["Bob".into(), Value::Int(35), "HR".into(), Value::Float(4100.5), Value::Bool(false)],
            vec!["Carla".into(), Value::Int(42), "IT".into(), Value::Null, Value::Bool(false)],
            vec!["Dana".into(), Value::Null, "Sales".into(), Value::Float(3900.0), Value::Bool(true)],
            vec!["Eve".into(), Value::Int(23), "it".into(), Value::Float(2800.0), Value::Null],
            vec!["Faisal".into(), Value::Int(35), "Sales".into(), Value::Float(4700.0), Value::Bool(true)],
        ],
    )
}

/// Values of one column, in row order
pub fn column(table: &Table, name: &str) -> Vec<Value> {
    let position = table
        .column_index()
        .resolve(name)
        .expect("column exists")
        .position;
    table.column_values(position).cloned().collect()
}
