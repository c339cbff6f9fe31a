//! Output formatting for command responses.
//!
//! Tables are drawn with `comfy-table`; everything else is plain text.

use std::io::Write;

use comfy_table::{Cell, ContentArrangement, Table as TextTable};
use datalens_core::{ColumnType, Table, Value};

use crate::session::Response;

/// Message printed for unrecognized commands
pub const UNKNOWN_COMMAND: &str = "Unknown command. Type 'help'.";

/// Render a table slice as a box table
pub fn format_table(table: &Table) -> String {
    let mut text = TextTable::new();
    text.set_content_arrangement(ContentArrangement::Dynamic);
    text.set_header(table.columns().iter().map(Cell::new));

    for row in table.rows() {
        text.add_row(row.iter().map(|value| Cell::new(format_value(value))));
    }

    text.to_string()
}

/// Render column names with their inferred types
pub fn format_types(types: &[(String, ColumnType)]) -> String {
    let mut text = TextTable::new();
    text.set_header(vec!["Column", "Type"]);
    for (name, kind) in types {
        text.add_row(vec![name.clone(), kind.label().to_string()]);
    }
    text.to_string()
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// Write a response to `out`. Returns `false` when there was nothing to
/// write (blank lines and exit).
pub fn write_response<W: Write>(response: &Response, out: &mut W) -> std::io::Result<bool> {
    match response {
        Response::Nothing | Response::Exit => return Ok(false),
        Response::Message(text) => writeln!(out, "{text}")?,
        Response::Rows { table, footer } => {
            writeln!(out, "{}", format_table(table))?;
            writeln!(out)?;
            writeln!(out, "{footer}")?;
        }
        Response::Types(types) => writeln!(out, "{}", format_types(types))?,
        Response::Usage(usage) => writeln!(out, "{usage}")?,
        Response::Unknown(_) => writeln!(out, "{UNKNOWN_COMMAND}")?,
    }
    Ok(true)
}
