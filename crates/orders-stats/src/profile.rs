//! Per-column value profile for the `--summary` report.

use std::collections::BTreeMap;

use polars::prelude::{DataFrame, DataType};

use crate::distinct::{NullPolicy, column_series, count_distinct};
use crate::error::Result;

/// A value and how many rows carry it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Shape of one column: size, nulls, distinct values and the most repeated ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnProfile {
    pub column: String,
    pub rows: usize,
    pub nulls: usize,
    /// Distinct non-null values.
    pub distinct: usize,
    /// Non-null rows whose value already appeared on an earlier row.
    pub duplicated_rows: usize,
    /// Values seen more than once, most frequent first, ties by value.
    pub repeated: Vec<ValueCount>,
}

impl ColumnProfile {
    pub fn has_duplicates(&self) -> bool {
        self.duplicated_rows > 0
    }
}

/// Profiles `column`, keeping at most `top` entries in [`ColumnProfile::repeated`].
pub fn profile_column(df: &DataFrame, column: &str, top: usize) -> Result<ColumnProfile> {
    let series = column_series(df, column)?;
    let as_text = series.cast(&DataType::String)?;

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut nulls = 0usize;
    for value in as_text.str()?.into_iter() {
        match value {
            Some(value) => *counts.entry(value).or_default() += 1,
            None => nulls += 1,
        }
    }

    let rows = series.len();
    // Same primitive as the report line, so the two never disagree.
    let distinct = count_distinct(df, column, NullPolicy::Exclude)?;
    let duplicated_rows = rows.saturating_sub(nulls + distinct);

    let mut repeated: Vec<ValueCount> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect();
    // BTreeMap order already sorts ties by value; the sort is stable.
    repeated.sort_by(|a, b| b.count.cmp(&a.count));
    repeated.truncate(top);

    Ok(ColumnProfile {
        column: column.to_string(),
        rows,
        nulls,
        distinct,
        duplicated_rows,
        repeated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;

    #[test]
    fn profiles_flattened_orders() {
        let df = df!(
            "orderID" => [Some("1001"), Some("1001"), Some("1002"), None, Some("1003"), Some("1003"), Some("1003")]
        )
        .unwrap();
        let profile = profile_column(&df, "orderID", 10).unwrap();

        assert_eq!(profile.rows, 7);
        assert_eq!(profile.nulls, 1);
        assert_eq!(profile.distinct, 3);
        assert_eq!(profile.duplicated_rows, 3);
        assert!(profile.has_duplicates());
        assert_eq!(
            profile.repeated,
            vec![
                ValueCount {
                    value: "1003".to_string(),
                    count: 3
                },
                ValueCount {
                    value: "1001".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn top_limits_repeated_values() {
        let df = df!("orderID" => [1i64, 1, 2, 2, 3, 3]).unwrap();
        let profile = profile_column(&df, "orderID", 2).unwrap();

        let values: Vec<&str> = profile.repeated.iter().map(|v| v.value.as_str()).collect();
        assert_eq!(values, vec!["1", "2"]);
    }

    #[test]
    fn unique_column_has_no_duplicates() {
        let df = df!("orderID" => [1i64, 2, 3]).unwrap();
        let profile = profile_column(&df, "orderID", 5).unwrap();

        assert!(!profile.has_duplicates());
        assert!(profile.repeated.is_empty());
        assert_eq!(profile.distinct, profile.rows);
    }

    #[test]
    fn distinct_matches_count_for_signed_zero() {
        let df = df!("orderWorth" => [Some(0.0f64), Some(-0.0), None, Some(2.5)]).unwrap();
        let profile = profile_column(&df, "orderWorth", 5).unwrap();

        assert_eq!(
            profile.distinct,
            count_distinct(&df, "orderWorth", NullPolicy::Exclude).unwrap()
        );
        assert_eq!(
            profile.nulls + profile.distinct + profile.duplicated_rows,
            profile.rows
        );
    }
}
