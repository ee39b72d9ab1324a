//! Error types for orders ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an orders export.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File starts with a byte-order mark of an encoding we do not read.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// CSV file has no header row at all.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Header row exists but names no columns.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },

    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === Schema Errors ===
    /// Required column not present in the header row.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl IngestError {
    /// Maps an I/O error on `path` to `FileNotFound` or `FileRead`.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: err,
            }
        }
    }
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/orders.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /data/orders.csv");

        let err = IngestError::MissingColumn {
            column: "orderID".to_string(),
            path: PathBuf::from("orders.csv"),
        };
        assert_eq!(
            err.to_string(),
            "required column 'orderID' not found in orders.csv"
        );
    }

    #[test]
    fn test_from_io_not_found() {
        let io = std::io::Error::from(std::io::ErrorKind::NotFound);
        let err = IngestError::from_io(std::path::Path::new("x.csv"), io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));

        let io = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        let err = IngestError::from_io(std::path::Path::new("x.csv"), io);
        assert!(matches!(err, IngestError::FileRead { .. }));
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("orderID".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
