//! Column statistics over a loaded orders table.
//!
//! The main entry point is [`distinct_count`], whose result renders as the
//! checker's report line:
//!
//! ```ignore
//! let report = distinct_count(&df, "orderID", NullPolicy::Exclude)?;
//! println!("{report}");
//! // Liczba unikalnych wartości w kolumnie 'orderID': 3
//! ```

mod distinct;
mod error;
mod profile;

pub use distinct::{DistinctCount, NullPolicy, count_distinct, distinct_count};
pub use error::{Result, StatsError};
pub use profile::{ColumnProfile, ValueCount, profile_column};
