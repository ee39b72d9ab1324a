use thiserror::Error;

/// Errors raised while computing column statistics.
#[derive(Debug, Error)]
pub enum StatsError {
    /// Column not found in DataFrame.
    #[error("column '{column}' not found in table")]
    ColumnNotFound { column: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for StatsError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
