//! File format selection by extension

use std::path::Path;

use datalens_core::{DatalensError, Result};

/// Formats a table can be loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    /// A JSON array of objects, or one object per line
    Json,
}

impl SourceFormat {
    /// Pick the reader for `path`. Unknown or missing extensions are rejected.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = extension_of(path);
        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "json" | "jsonl" | "ndjson" => Ok(Self::Json),
            _ => Err(DatalensError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }
}

/// Formats a table can be written as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    /// `.json` (any case) selects JSON; everything else is written as CSV
    pub fn from_path(path: &Path) -> Self {
        if extension_of(path) == "json" {
            Self::Json
        } else {
            Self::Csv
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_format_by_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("a/people.CSV")).unwrap(),
            SourceFormat::Csv
        );
        for name in ["x.json", "x.jsonl", "x.NDJSON"] {
            assert_eq!(
                SourceFormat::from_path(Path::new(name)).unwrap(),
                SourceFormat::Json
            );
        }
    }

    #[test]
    fn unknown_source_extension_is_unsupported() {
        for name in ["data.xlsx", "data", "data.csv.gz"] {
            let err = SourceFormat::from_path(Path::new(name)).unwrap_err();
            assert!(matches!(err, DatalensError::UnsupportedFormat(_)), "{name}");
        }
    }

    #[test]
    fn export_format_defaults_to_csv() {
        assert_eq!(ExportFormat::from_path(Path::new("out.Json")), ExportFormat::Json);
        assert_eq!(ExportFormat::from_path(Path::new("out.csv")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("out.txt")), ExportFormat::Csv);
        assert_eq!(ExportFormat::from_path(Path::new("out")), ExportFormat::Csv);
    }
}
