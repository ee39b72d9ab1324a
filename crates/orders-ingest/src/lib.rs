//! Orders export ingestion.
//!
//! Loads a comma-separated orders export (normally `orders.csv`) into a
//! Polars [`DataFrame`](polars::prelude::DataFrame).
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use orders_ingest::load_table;
//!
//! let df = load_table(Path::new("orders.csv"), "orderID")?;
//! println!("{} rows", df.height());
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use self::csv::{
    CsvHeaders, load_table, read_csv_headers, read_csv_table, validate_encoding,
};

/// File name the checker reads when no path is given.
pub const DEFAULT_ORDERS_FILE: &str = "orders.csv";
