//! Input normalization.
//!
//! Callers may hand the pipeline a single timestamp, a sequence of
//! timestamps, or a table that already carries a timestamp column. All three
//! are coerced to one canonical shape here before any extractor runs.

use chrono::NaiveDateTime;
use polars::prelude::{DataFrame, IntoColumn, IntoSeries, TimeUnit};

use dtfeat_model::{FeatureError, Result};

/// Column name used for timestamps when the caller does not specify one.
pub const DEFAULT_TIMESTAMP_COLUMN: &str = "datetime";

/// The accepted input shapes for feature extraction.
#[derive(Debug, Clone)]
pub enum FeatureInput {
    /// A single timestamp; normalizes to a one-row table.
    Timestamp(NaiveDateTime),
    /// An ordered sequence of timestamps; normalizes to a multi-row table.
    Timestamps(Vec<NaiveDateTime>),
    /// A table expected to contain the timestamp column.
    Table(DataFrame),
}

impl From<NaiveDateTime> for FeatureInput {
    fn from(value: NaiveDateTime) -> Self {
        FeatureInput::Timestamp(value)
    }
}

impl From<Vec<NaiveDateTime>> for FeatureInput {
    fn from(values: Vec<NaiveDateTime>) -> Self {
        FeatureInput::Timestamps(values)
    }
}

impl From<&[NaiveDateTime]> for FeatureInput {
    fn from(values: &[NaiveDateTime]) -> Self {
        FeatureInput::Timestamps(values.to_vec())
    }
}

impl From<DataFrame> for FeatureInput {
    fn from(table: DataFrame) -> Self {
        FeatureInput::Table(table)
    }
}

/// Coerce `input` to a table holding `timestamp_column`.
///
/// Tables are passed through unchanged when the column is present; a table
/// without it fails with [`FeatureError::MissingTimestampColumn`]. Pure
/// function of its input.
pub fn normalize_input(input: FeatureInput, timestamp_column: &str) -> Result<DataFrame> {
    match input {
        FeatureInput::Timestamp(value) => timestamps_to_frame(&[value], timestamp_column),
        FeatureInput::Timestamps(values) => timestamps_to_frame(&values, timestamp_column),
        FeatureInput::Table(table) => {
            if table.column(timestamp_column).is_err() {
                return Err(FeatureError::MissingTimestampColumn {
                    column: timestamp_column.to_string(),
                });
            }
            Ok(table)
        }
    }
}

fn timestamps_to_frame(values: &[NaiveDateTime], timestamp_column: &str) -> Result<DataFrame> {
    use polars::prelude::Int64Chunked;

    let micros: Vec<i64> = values
        .iter()
        .map(|t| t.and_utc().timestamp_micros())
        .collect();
    let series = Int64Chunked::from_vec(timestamp_column.into(), micros)
        .into_datetime(TimeUnit::Microseconds, None)
        .into_series();
    Ok(DataFrame::new(vec![series.into_column()])?)
}
