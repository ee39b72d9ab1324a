//! CLI argument definitions for the orders checker.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use orders_cli::check::DEFAULT_COLUMN;
use orders_ingest::DEFAULT_ORDERS_FILE;

#[derive(Parser)]
#[command(
    name = "orders-checker",
    version,
    about = "Count distinct order IDs in an orders CSV export",
    long_about = "Load an orders CSV export and print the number of distinct values \
                  in one column (orderID by default).\n\n\
                  Empty cells are not counted unless --include-nulls is given."
)]
pub struct Cli {
    /// Path to the CSV export.
    #[arg(value_name = "FILE", default_value = DEFAULT_ORDERS_FILE)]
    pub file: PathBuf,

    /// Column whose distinct values are counted.
    #[arg(long = "column", value_name = "NAME", default_value = DEFAULT_COLUMN)]
    pub column: String,

    /// Count empty cells as one additional distinct value.
    #[arg(long = "include-nulls")]
    pub include_nulls: bool,

    /// Print a profile of the column after the count.
    #[arg(long = "summary")]
    pub summary: bool,

    /// Number of repeated values listed by --summary.
    #[arg(long = "top", value_name = "N", default_value_t = 10, requires = "summary")]
    pub top: usize,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_match_reference_invocation() {
        let cli = Cli::try_parse_from(["orders-checker"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("orders.csv"));
        assert_eq!(cli.column, "orderID");
        assert!(!cli.include_nulls);
        assert!(!cli.summary);
    }

    #[test]
    fn top_requires_summary() {
        assert!(Cli::try_parse_from(["orders-checker", "--top", "3"]).is_err());
        let cli = Cli::try_parse_from(["orders-checker", "--summary", "--top", "3"]).unwrap();
        assert_eq!(cli.top, 3);
    }
}
