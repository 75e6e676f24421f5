//! DataFrame value extraction helpers.
//!
//! Every extractor reads the timestamp column through [`datetime_values`],
//! so schema and dtype validation happens in one place, before any feature
//! is computed.

use chrono::{NaiveDateTime, NaiveTime};
use polars::prelude::{DataFrame, DataType, Series};

use dtfeat_model::{FeatureError, Result};

/// Materialize the timestamp column of `df` as chrono values.
///
/// Accepts Datetime columns of any time unit and Date columns (interpreted
/// as midnight). A missing column is a schema error; any other dtype or a
/// null value is a type error.
pub fn datetime_values(df: &DataFrame, column: &str) -> Result<Vec<NaiveDateTime>> {
    let series = df
        .column(column)
        .map_err(|_| FeatureError::MissingTimestampColumn {
            column: column.to_string(),
        })?
        .as_materialized_series();

    match series.dtype() {
        DataType::Datetime(_, _) => collect_datetimes(series, column),
        DataType::Date => collect_dates(series, column),
        other => Err(FeatureError::UnsupportedColumnType {
            column: column.to_string(),
            dtype: other.to_string(),
        }),
    }
}

fn collect_datetimes(series: &Series, column: &str) -> Result<Vec<NaiveDateTime>> {
    let ca = series.datetime()?;
    ca.as_datetime_iter()
        .enumerate()
        .map(|(row, value)| {
            value.ok_or_else(|| FeatureError::NullTimestamp {
                column: column.to_string(),
                row,
            })
        })
        .collect()
}

fn collect_dates(series: &Series, column: &str) -> Result<Vec<NaiveDateTime>> {
    let ca = series.date()?;
    ca.as_date_iter()
        .enumerate()
        .map(|(row, value)| {
            value
                .map(|date| date.and_time(NaiveTime::MIN))
                .ok_or_else(|| FeatureError::NullTimestamp {
                    column: column.to_string(),
                    row,
                })
        })
        .collect()
}
