//! Header row inspection.

use std::fs::File;
use std::path::Path;

use ::csv::{ErrorKind, Reader, ReaderBuilder, StringRecord};

use crate::error::{IngestError, Result};

/// Column names from the first row of a CSV file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Column names in file order, exactly as written (BOM stripped).
    pub columns: Vec<String>,
}

impl CsvHeaders {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Position of `column`, matched case-sensitively.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|name| name == column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.position(column).is_some()
    }

    /// Returns the position of `column` or a `MissingColumn` error naming `path`.
    pub fn require(&self, column: &str, path: &Path) -> Result<usize> {
        self.position(column)
            .ok_or_else(|| IngestError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            })
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').to_string()
}

pub(crate) fn csv_error(path: &Path, err: ::csv::Error) -> IngestError {
    let message = err.to_string();
    match err.into_kind() {
        ErrorKind::Io(source) => IngestError::from_io(path, source),
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}

/// Opens `path` for record-by-record reading. Empty lines are skipped.
pub(crate) fn open_reader(path: &Path) -> Result<Reader<File>> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    Ok(ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file))
}

/// Consumes the first non-blank record of `reader` as the header row.
pub(crate) fn read_header_record(reader: &mut Reader<File>, path: &Path) -> Result<CsvHeaders> {
    let mut record = StringRecord::new();
    if !reader
        .read_record(&mut record)
        .map_err(|e| csv_error(path, e))?
    {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let columns: Vec<String> = record.iter().map(normalize_header).collect();
    if columns.iter().all(|name| name.trim().is_empty()) {
        return Err(IngestError::NoHeaderDetected {
            path: path.to_path_buf(),
        });
    }
    Ok(CsvHeaders::new(columns))
}

/// Reads the header row of `path`.
///
/// Blank lines before the header are skipped. A file with no rows at all is
/// [`IngestError::EmptyCsv`]; a header whose names are all empty is
/// [`IngestError::NoHeaderDetected`].
pub fn read_csv_headers(path: &Path) -> Result<CsvHeaders> {
    let mut reader = open_reader(path)?;
    read_header_record(&mut reader, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_headers() {
        let file = create_temp_csv("orderID,orderWorth,productID,quantity\n1001,25.5,P1,2\n");
        let headers = read_csv_headers(file.path()).unwrap();

        assert_eq!(
            headers.columns,
            vec!["orderID", "orderWorth", "productID", "quantity"]
        );
        assert_eq!(headers.position("productID"), Some(2));
    }

    #[test]
    fn test_read_headers_skips_leading_blank_lines() {
        let file = create_temp_csv("\n\norderID,orderWorth\n1,2\n");
        let headers = read_csv_headers(file.path()).unwrap();

        assert_eq!(headers.columns, vec!["orderID", "orderWorth"]);
    }

    #[test]
    fn test_read_headers_with_bom() {
        let file = create_temp_csv("\u{feff}orderID,orderWorth\n1,2\n");
        let headers = read_csv_headers(file.path()).unwrap();

        assert!(headers.contains("orderID"));
    }

    #[test]
    fn test_read_headers_empty_file() {
        let file = create_temp_csv("");
        let result = read_csv_headers(file.path());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_headers_blank_names() {
        let file = create_temp_csv(",,\n1,2,3\n");
        let result = read_csv_headers(file.path());

        assert!(matches!(result, Err(IngestError::NoHeaderDetected { .. })));
    }

    #[test]
    fn test_require_is_case_sensitive() {
        let headers = CsvHeaders::new(vec!["OrderId".to_string()]);
        let err = headers
            .require("orderID", Path::new("orders.csv"))
            .unwrap_err();

        assert!(matches!(err, IngestError::MissingColumn { ref column, .. } if column == "orderID"));
    }
}
