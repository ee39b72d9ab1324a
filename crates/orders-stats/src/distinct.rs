//! Distinct-value counting.

use std::fmt;

use polars::prelude::{DataFrame, Series};
use tracing::debug;

use crate::error::{Result, StatsError};

/// How null cells take part in a distinct count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NullPolicy {
    /// Nulls are not values; they never add to the count.
    #[default]
    Exclude,
    /// All nulls together count as one extra distinct value.
    Include,
}

/// Distinct count of one column, rendered as the checker's report line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistinctCount {
    pub column: String,
    pub count: usize,
}

impl fmt::Display for DistinctCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Liczba unikalnych wartości w kolumnie '{}': {}",
            self.column, self.count
        )
    }
}

pub(crate) fn column_series<'a>(df: &'a DataFrame, column: &str) -> Result<&'a Series> {
    df.column(column)
        .map(|col| col.as_materialized_series())
        .map_err(|_| StatsError::ColumnNotFound {
            column: column.to_string(),
        })
}

/// Counts distinct values in `column`.
pub fn count_distinct(df: &DataFrame, column: &str, policy: NullPolicy) -> Result<usize> {
    let series = column_series(df, column)?;
    let nulls = series.null_count();
    let mut count = series.drop_nulls().n_unique()?;
    if policy == NullPolicy::Include && nulls > 0 {
        count += 1;
    }
    debug!(
        column,
        rows = series.len(),
        nulls,
        distinct = count,
        ?policy,
        "counted distinct values"
    );
    Ok(count)
}

pub fn distinct_count(df: &DataFrame, column: &str, policy: NullPolicy) -> Result<DistinctCount> {
    Ok(DistinctCount {
        column: column.to_string(),
        count: count_distinct(df, column, policy)?,
    })
}
