//! CSV import
//!
//! The first record is the header. Cells are typed per column: a column is
//! `Int`, `Float` or `Bool` only when every non-empty cell parses as one, and
//! empty cells load as null.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use datalens_core::{DatalensError, Result, Row, Table, Value};

/// Read a CSV file into a table
pub fn read_csv(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => DatalensError::FileNotFound(path.to_path_buf()),
        _ => DatalensError::Io(err),
    })?;
    parse_csv(file)
}

/// Parse CSV text from any reader
pub fn parse_csv<R: Read>(reader: R) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(csv_error)?.clone();
    let columns = unique_column_names(headers.iter());
    let width = columns.len();

    let mut cells: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(csv_error)?;
        if record.len() > width {
            return Err(DatalensError::Parse {
                line: record.position().map_or(0, |p| p.line() as usize),
                message: format!("expected {} fields, found {}", width, record.len()),
            });
        }
        cells.push(record.iter().map(str::to_string).collect());
    }

    let kinds: Vec<CellKind> = (0..width)
        .map(|col| CellKind::infer(cells.iter().filter_map(|row| row.get(col))))
        .collect();

    let rows: Vec<Row> = cells
        .into_iter()
        .map(|raw| {
            kinds
                .iter()
                .enumerate()
                .map(|(col, kind)| raw.get(col).map_or(Value::Null, |cell| kind.convert(cell)))
                .collect()
        })
        .collect();

    tracing::debug!(rows = rows.len(), columns = width, "parsed csv");
    Ok(Table::new(columns, rows))
}

/// Column storage kind inferred from the raw cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Int,
    Float,
    Bool,
    Text,
}

impl CellKind {
    fn infer<'a>(cells: impl Iterator<Item = &'a String>) -> Self {
        let mut all_int = true;
        let mut all_float = true;
        let mut all_bool = true;
        let mut any = false;

        for cell in cells.filter(|c| !c.is_empty()) {
            any = true;
            all_int &= cell.parse::<i64>().is_ok();
            all_float &= looks_numeric(cell) && cell.parse::<f64>().is_ok();
            all_bool &= cell.eq_ignore_ascii_case("true") || cell.eq_ignore_ascii_case("false");
        }

        match (any, all_int, all_float, all_bool) {
            (false, ..) => CellKind::Text,
            (true, true, _, _) => CellKind::Int,
            (true, false, true, _) => CellKind::Float,
            (true, false, false, true) => CellKind::Bool,
            _ => CellKind::Text,
        }
    }

    fn convert(&self, cell: &str) -> Value {
        if cell.is_empty() {
            return Value::Null;
        }
        match self {
            CellKind::Int => cell.parse().map(Value::Int).unwrap_or(Value::Null),
            CellKind::Float => cell.parse().map(Value::Float).unwrap_or(Value::Null),
            CellKind::Bool => Value::Bool(cell.eq_ignore_ascii_case("true")),
            CellKind::Text => Value::String(cell.to_string()),
        }
    }
}

/// `f64::from_str` also accepts `inf` and `nan`; those stay text.
fn looks_numeric(cell: &str) -> bool {
    cell.bytes().any(|b| b.is_ascii_digit())
}

/// Blank headers become `Unnamed: {i}`; repeated names get a `.1`, `.2` suffix.
fn unique_column_names<'a>(headers: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for (idx, header) in headers.enumerate() {
        let base = if header.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            header.to_string()
        };

        let mut name = base.clone();
        let mut suffix = 1;
        while columns.contains(&name) {
            name = format!("{base}.{suffix}");
            suffix += 1;
        }
        columns.push(name);
    }
    columns
}

pub(crate) fn csv_error(err: csv::Error) -> DatalensError {
    let line = err.position().map_or(0, |p| p.line() as usize);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => DatalensError::Io(io),
        _ => DatalensError::Parse { line, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> Table {
        parse_csv(text.as_bytes()).unwrap()
    }

    #[test]
    fn infers_column_types() {
        let table = parse("id,score,active,name\n1,2.5,true,Ali\n2,3,FALSE,Bob\n");
        assert_eq!(table.columns(), &["id", "score", "active", "name"]);
        assert_eq!(
            table.rows(),
            &[
                vec![Value::Int(1), Value::Float(2.5), Value::Bool(true), "Ali".into()],
                vec![Value::Int(2), Value::Float(3.0), Value::Bool(false), "Bob".into()],
            ]
        );
    }

    #[test]
    fn empty_cells_are_null() {
        let table = parse("a,b\n1,\n,x\n");
        assert_eq!(
            table.rows(),
            &[
                vec![Value::Int(1), Value::Null],
                vec![Value::Null, "x".into()],
            ]
        );
    }

    #[test]
    fn mixed_columns_stay_text() {
        let table = parse("code\n007\nabc\n");
        assert_eq!(table.rows(), &[vec![Value::from("007")], vec![Value::from("abc")]]);

        let table = parse("word\nnan\ninf\n");
        assert_eq!(table.column_type(0).label(), "string");
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let table = parse("name,city\n\"Doe, Jane\",Riyadh\n");
        assert_eq!(table.get(0, 0), Some(&Value::from("Doe, Jane")));
    }

    #[test]
    fn short_rows_are_padded_long_rows_rejected() {
        let table = parse("a,b,c\n1,2\n");
        assert_eq!(table.rows(), &[vec![Value::Int(1), Value::Int(2), Value::Null]]);

        let err = parse_csv("a,b\n1,2\n1,2,3\n".as_bytes()).unwrap_err();
        match err {
            DatalensError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert_eq!(message, "expected 2 fields, found 3");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicate_and_blank_headers_are_renamed() {
        let table = parse("a,a,,a\n1,2,3,4\n");
        assert_eq!(table.columns(), &["a", "a.1", "Unnamed: 2", "a.2"]);
    }

    #[test]
    fn header_only_file_has_no_rows() {
        let table = parse("a,b\n");
        assert_eq!(table.column_count(), 2);
        assert!(table.is_empty());
    }
}
