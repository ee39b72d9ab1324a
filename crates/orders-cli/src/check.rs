//! The check pipeline: load, select column, deduplicate, count, report.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use orders_ingest::{DEFAULT_ORDERS_FILE, load_table};
use orders_stats::{ColumnProfile, DistinctCount, NullPolicy, distinct_count, profile_column};

/// Column the checker counts unless told otherwise.
pub const DEFAULT_COLUMN: &str = "orderID";

/// Inputs of a single check run.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub path: PathBuf,
    pub column: String,
    pub null_policy: NullPolicy,
    /// Also profile the column, listing up to this many repeated values.
    pub profile_top: Option<usize>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_ORDERS_FILE),
            column: DEFAULT_COLUMN.to_string(),
            null_policy: NullPolicy::Exclude,
            profile_top: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    pub report: DistinctCount,
    pub profile: Option<ColumnProfile>,
}

/// Runs one check. Either every step succeeds or nothing is reported.
pub fn run_check(options: &CheckOptions) -> Result<CheckResult> {
    let span = info_span!(
        "check",
        path = %options.path.display(),
        column = %options.column
    );
    let _guard = span.enter();
    let start = Instant::now();

    let df = load_table(&options.path, &options.column)
        .with_context(|| format!("load {}", options.path.display()))?;
    info!(rows = df.height(), columns = df.width(), "table loaded");

    let report = distinct_count(&df, &options.column, options.null_policy)
        .with_context(|| format!("count distinct values in '{}'", options.column))?;

    let profile = options
        .profile_top
        .map(|top| profile_column(&df, &options.column, top))
        .transpose()
        .with_context(|| format!("profile column '{}'", options.column))?;

    info!(
        distinct = report.count,
        duration_ms = start.elapsed().as_millis(),
        "check complete"
    );
    Ok(CheckResult { report, profile })
}
