//! datalens data interchange
//!
//! Reads tables from CSV, JSON and JSON-lines files and writes them back out
//! as CSV or pretty-printed JSON.
//!
//! ```text
//! .csv | .json | .jsonl | .ndjson → load_table → Table → export_table → .json | .csv
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let table = load_table("people.csv")?;
//! export_table(&table, "people.json")?;
//! ```

mod csv_export;
mod csv_import;
mod format;
mod json_export;
mod json_import;

pub use csv_export::{write_csv, write_csv_to};
pub use csv_import::{parse_csv, read_csv};
pub use format::{ExportFormat, SourceFormat};
pub use json_export::{table_to_json_string, write_json};
pub use json_import::{parse_json, read_json};

use std::path::Path;

use datalens_core::{DatalensError, Result, Table};

/// Load a table, choosing the reader from the file extension.
pub fn load_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(DatalensError::FileNotFound(path.to_path_buf()));
    }

    let table = match SourceFormat::from_path(path)? {
        SourceFormat::Csv => read_csv(path)?,
        SourceFormat::Json => read_json(path)?,
    };

    tracing::info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "loaded table"
    );
    Ok(table)
}

/// Write a table as JSON when the extension is `.json`, CSV otherwise.
pub fn export_table(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path);
    match format {
        ExportFormat::Json => write_json(table, path)?,
        ExportFormat::Csv => write_csv(table, path)?,
    }

    tracing::info!(
        path = %path.display(),
        rows = table.row_count(),
        format = format.label(),
        "exported table"
    );
    Ok(())
}
