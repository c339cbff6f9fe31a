//! JSON export

use std::path::Path;

use datalens_core::{Result, Table};
use serde_json::Map;

/// Render a table as a pretty-printed (2-space indented) array of objects
pub fn table_to_json_string(table: &Table) -> Result<String> {
    let records: Vec<serde_json::Value> = table
        .rows()
        .iter()
        .map(|row| {
            let object: Map<String, serde_json::Value> = table
                .columns()
                .iter()
                .zip(row)
                .map(|(column, value)| (column.clone(), value.to_json()))
                .collect();
            serde_json::Value::Object(object)
        })
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}

/// Write a table to a JSON file
pub fn write_json(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let mut text = table_to_json_string(table)?;
    text.push('\n');
    std::fs::write(path.as_ref(), text)?;
    Ok(())
}
