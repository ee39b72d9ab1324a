//! CSV reading utilities.

mod header;
mod reader;

pub use header::{CsvHeaders, read_csv_headers};
pub use reader::{load_table, read_csv_table, validate_encoding};
