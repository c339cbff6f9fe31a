//! Error types for datalens

use std::path::PathBuf;

use thiserror::Error;

/// Core error type for datalens operations
#[derive(Error, Debug)]
pub enum DatalensError {
    /// The expression kind ("Filter", "Sort") is carried for the message.
    #[error("{0} expression is empty.")]
    EmptyExpression(&'static str),

    #[error("Missing column name in condition '{0}'.")]
    MissingColumn(String),

    #[error("Missing value in condition '{0}'.")]
    MissingValue(String),

    #[error("Invalid condition '{condition}'. Use one of: {operators}")]
    InvalidCondition { condition: String, operators: String },

    #[error("Unknown column '{column}'. Available: {available}")]
    UnknownColumn { column: String, available: String },

    #[error("Invalid order '{0}'. Order must be 'asc' or 'desc'.")]
    InvalidOrder(String),

    #[error("Invalid page size {0}. Page size must be at least 1.")]
    InvalidPageSize(usize),

    #[error("Unsupported format '{0}'. Use .csv or .json files.")]
    UnsupportedFormat(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for datalens operations
pub type Result<T> = std::result::Result<T, DatalensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_column_names_available_columns() {
        let err = DatalensError::UnknownColumn {
            column: "salary".to_string(),
            available: "Name, Age".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown column 'salary'. Available: Name, Age"
        );
    }

    #[test]
    fn empty_expression_mentions_kind() {
        assert_eq!(
            DatalensError::EmptyExpression("Filter").to_string(),
            "Filter expression is empty."
        );
    }

    #[test]
    fn file_not_found_displays_path() {
        let err = DatalensError::FileNotFound(PathBuf::from("missing.csv"));
        assert_eq!(err.to_string(), "File not found: missing.csv");
    }
}
