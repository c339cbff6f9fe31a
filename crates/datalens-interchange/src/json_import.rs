//! JSON import
//!
//! Accepts either a single array of objects or JSON lines (one object per
//! line). Columns appear in the order their keys are first seen; a key
//! missing from an object loads as null.

use std::path::Path;

use datalens_core::{DatalensError, Result, Row, Table, Value};
use serde_json::Map;

type Object = Map<String, serde_json::Value>;

/// Read a JSON or JSON-lines file into a table
pub fn read_json(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => DatalensError::FileNotFound(path.to_path_buf()),
        _ => DatalensError::Io(err),
    })?;
    parse_json(&text)
}

/// Parse JSON text. The whole document is tried first, then line by line.
///
/// When both fail, the error reported is the one for the layout the text
/// appears to use: a document starting with `[` is reported as an array.
pub fn parse_json(text: &str) -> Result<Table> {
    let whole = parse_document(text);
    let objects = match whole {
        Ok(objects) => objects,
        Err(document_error) => match parse_lines(text) {
            Ok(objects) => {
                tracing::debug!("parsed input as json lines");
                objects
            }
            Err(_) if text.trim_start().starts_with('[') => return Err(document_error),
            Err(lines_error) => return Err(lines_error),
        },
    };
    Ok(objects_to_table(objects))
}

fn parse_document(text: &str) -> Result<Vec<Object>> {
    let document: serde_json::Value =
        serde_json::from_str(text).map_err(|err| DatalensError::Parse {
            line: err.line(),
            message: err.to_string(),
        })?;

    match document {
        serde_json::Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| match item {
                serde_json::Value::Object(object) => Ok(object),
                other => Err(DatalensError::Parse {
                    line: 1,
                    message: format!("array element {idx} is not an object: {other}"),
                }),
            })
            .collect(),
        _ => Err(DatalensError::Parse {
            line: 1,
            message: "expected an array of objects".to_string(),
        }),
    }
}

fn parse_lines(text: &str) -> Result<Vec<Object>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            let value: serde_json::Value =
                serde_json::from_str(line).map_err(|err| DatalensError::Parse {
                    line: idx + 1,
                    message: err.to_string(),
                })?;
            match value {
                serde_json::Value::Object(object) => Ok(object),
                _ => Err(DatalensError::Parse {
                    line: idx + 1,
                    message: "expected a JSON object".to_string(),
                }),
            }
        })
        .collect()
}

fn objects_to_table(objects: Vec<Object>) -> Table {
    let mut columns: Vec<String> = Vec::new();
    for object in &objects {
        for key in object.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }

    let rows: Vec<Row> = objects
        .iter()
        .map(|object| {
            columns
                .iter()
                .map(|column| object.get(column).map_or(Value::Null, Value::from_json))
                .collect()
        })
        .collect();

    Table::new(columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn array_of_objects() {
        let table =
            parse_json(r#"[{"Name": "Ali", "Age": 20}, {"Name": "Bob", "Age": 30.5}]"#).unwrap();
        assert_eq!(table.columns(), &["Name", "Age"]);
        assert_eq!(
            table.rows(),
            &[
                vec![Value::from("Ali"), Value::Int(20)],
                vec![Value::from("Bob"), Value::Float(30.5)],
            ]
        );
    }

    #[test]
    fn json_lines_fallback() {
        let text = "{\"a\": 1}\n\n{\"b\": true, \"a\": 2}\n";
        let table = parse_json(text).unwrap();
        assert_eq!(table.columns(), &["a", "b"]);
        assert_eq!(
            table.rows(),
            &[
                vec![Value::Int(1), Value::Null],
                vec![Value::Int(2), Value::Bool(true)],
            ]
        );
    }

    #[test]
    fn single_object_is_one_line() {
        let table = parse_json(r#"{"x": null}"#).unwrap();
        assert_eq!(table.rows(), &[vec![Value::Null]]);
    }

    #[test]
    fn bad_line_reports_its_number() {
        let err = parse_json("{\"a\": 1}\n{\"a\": \n").unwrap_err();
        assert!(matches!(err, DatalensError::Parse { line: 2, .. }), "{err}");
    }

    #[test]
    fn broken_array_reports_document_error() {
        let err = parse_json("[\n{\"a\": 1},\n{\"a\": }\n]").unwrap_err();
        assert!(matches!(err, DatalensError::Parse { line: 3, .. }), "{err}");

        let err = parse_json("[1, 2]").unwrap_err();
        assert!(matches!(err, DatalensError::Parse { line: 1, .. }), "{err}");
    }

    #[test]
    fn empty_array_is_empty_table() {
        let table = parse_json("[]").unwrap();
        assert_eq!(table.column_count(), 0);
        assert!(table.is_empty());
    }
}
