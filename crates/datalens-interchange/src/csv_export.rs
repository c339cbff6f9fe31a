//! CSV export

use std::io::Write;
use std::path::Path;

use csv::Writer;
use datalens_core::{Result, Table, Value};

use crate::csv_import::csv_error;

/// Write a table to a CSV file: a header row, then one record per row
pub fn write_csv(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_csv_to(table, file)
}

/// Write a table as CSV to any writer. Null cells are written empty.
pub fn write_csv_to<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);

    wtr.write_record(table.columns()).map_err(csv_error)?;
    for row in table.rows() {
        wtr.write_record(row.iter().map(cell_text))
            .map_err(csv_error)?;
    }

    wtr.flush()?;
    Ok(())
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
