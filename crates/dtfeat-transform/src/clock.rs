//! Clock-field extraction: hour, minute, second.

use chrono::Timelike;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use dtfeat_model::Result;

use crate::data_utils::datetime_values;
use crate::extractor::FeatureExtractor;
use crate::frame::DEFAULT_TIMESTAMP_COLUMN;

/// Projects the time-of-day components of the timestamp column.
///
/// Output columns, in order: `hour` (0-23), `minute` (0-59), `second`
/// (0-59).
#[derive(Debug, Clone)]
pub struct ClockFeatures {
    timestamp_column: String,
}

impl ClockFeatures {
    pub fn new(timestamp_column: impl Into<String>) -> Self {
        Self {
            timestamp_column: timestamp_column.into(),
        }
    }
}

impl Default for ClockFeatures {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTAMP_COLUMN)
    }
}

impl FeatureExtractor for ClockFeatures {
    fn name(&self) -> &'static str {
        "clock"
    }

    fn extract(&self, df: &DataFrame) -> Result<DataFrame> {
        let timestamps = datetime_values(df, &self.timestamp_column)?;

        let mut hour = Vec::with_capacity(timestamps.len());
        let mut minute = Vec::with_capacity(timestamps.len());
        let mut second = Vec::with_capacity(timestamps.len());

        for t in &timestamps {
            hour.push(t.hour());
            minute.push(t.minute());
            second.push(t.second());
        }

        let columns: Vec<Column> = vec![
            Series::new("hour".into(), hour).into_column(),
            Series::new("minute".into(), minute).into_column(),
            Series::new("second".into(), second).into_column(),
        ];
        Ok(DataFrame::new(columns)?)
    }
}
