//! CSV file loading into Polars DataFrames.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use ::csv::{Reader, StringRecord};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use tracing::{debug, info_span};

use crate::error::{IngestError, Result};

use super::header::{CsvHeaders, csv_error, open_reader, read_header_record};

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| IngestError::from_io(path, e))?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads a CSV file with a single header row into a DataFrame.
///
/// Empty lines are skipped anywhere in the file. Empty fields load as null
/// and short rows are padded with nulls; a row with more fields than the
/// header is a parse error. Column types are inferred from all rows.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    validate_encoding(path)?;
    let mut reader = open_reader(path)?;
    let headers = read_header_record(&mut reader, path)?;
    read_body(&mut reader, &headers, path)
}

/// Reads an orders export and checks that it carries `column`.
///
/// The column check runs against the header row before the body is parsed,
/// so a missing column is reported even when the body is malformed.
pub fn load_table(path: &Path, column: &str) -> Result<DataFrame> {
    let span = info_span!("load_table", path = %path.display(), column);
    let _guard = span.enter();

    validate_encoding(path)?;
    let mut reader = open_reader(path)?;
    let headers = read_header_record(&mut reader, path)?;
    headers.require(column, path)?;
    read_body(&mut reader, &headers, path)
}

fn read_body(reader: &mut Reader<File>, headers: &CsvHeaders, path: &Path) -> Result<DataFrame> {
    let width = headers.columns.len();
    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); width];
    let mut record = StringRecord::new();

    while reader
        .read_record(&mut record)
        .map_err(|e| csv_error(path, e))?
    {
        if record.len() > width {
            let line = record.position().map_or(0, ::csv::Position::line);
            return Err(IngestError::CsvParse {
                path: path.to_path_buf(),
                message: format!(
                    "line {line}: found {} fields, header defines {width}",
                    record.len()
                ),
            });
        }
        for (idx, values) in cells.iter_mut().enumerate() {
            let value = record
                .get(idx)
                .filter(|value| !value.is_empty())
                .map(str::to_string);
            values.push(value);
        }
    }

    let names = unique_names(&headers.columns);
    let columns = names
        .iter()
        .zip(cells)
        .map(|(name, values)| infer_series(name, values).into_column())
        .collect();
    let df = DataFrame::new(columns)?;

    debug!(rows = df.height(), columns = df.width(), "table loaded");
    Ok(df)
}

/// Repeated header names get a `.N` suffix so every column stays addressable.
fn unique_names(columns: &[String]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    columns
        .iter()
        .map(|name| {
            let count = seen.entry(name.as_str()).or_default();
            let unique = if *count == 0 {
                name.clone()
            } else {
                format!("{name}.{count}")
            };
            *count += 1;
            unique
        })
        .collect()
}

fn is_integer_text(value: &str) -> bool {
    let digits = value.strip_prefix(['-', '+']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Picks the narrowest type every non-null value parses as.
///
/// Order: `Int64`, `UInt64`, then `Float64`. Integer text too wide for 64
/// bits stays `String` so large identifiers keep every digit. Columns with
/// no values are `String`.
pub(crate) fn infer_series(name: &str, values: Vec<Option<String>>) -> Series {
    if values.iter().all(Option::is_none) {
        return Series::new(name.into(), values);
    }
    let present = || values.iter().flatten();

    if present().all(|v| v.parse::<i64>().is_ok()) {
        let parsed: Vec<Option<i64>> = values
            .iter()
            .map(|v| v.as_deref().and_then(|v| v.parse().ok()))
            .collect();
        return Series::new(name.into(), parsed);
    }
    if present().all(|v| v.parse::<u64>().is_ok()) {
        let parsed: Vec<Option<u64>> = values
            .iter()
            .map(|v| v.as_deref().and_then(|v| v.parse().ok()))
            .collect();
        return Series::new(name.into(), parsed);
    }
    if !present().all(|v| is_integer_text(v)) && present().all(|v| v.parse::<f64>().is_ok()) {
        let parsed: Vec<Option<f64>> = values
            .iter()
            .map(|v| v.as_deref().and_then(|v| v.parse().ok()))
            .collect();
        return Series::new(name.into(), parsed);
    }
    Series::new(name.into(), values)
}
