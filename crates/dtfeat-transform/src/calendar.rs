//! Calendar-field extraction: year, month, day, day-of-week, day-of-year,
//! ISO week, quarter.

use chrono::Datelike;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use dtfeat_model::Result;

use crate::data_utils::datetime_values;
use crate::extractor::FeatureExtractor;
use crate::frame::DEFAULT_TIMESTAMP_COLUMN;

/// Projects the date components of the timestamp column.
///
/// Output columns, in order: `year`, `month`, `day`, `day_of_week`
/// (Monday = 0), `day_of_year` (1-based), `week_of_year` (ISO), `quarter`
/// (1-4).
#[derive(Debug, Clone)]
pub struct CalendarFeatures {
    timestamp_column: String,
}

impl CalendarFeatures {
    pub fn new(timestamp_column: impl Into<String>) -> Self {
        Self {
            timestamp_column: timestamp_column.into(),
        }
    }
}

impl Default for CalendarFeatures {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTAMP_COLUMN)
    }
}

impl FeatureExtractor for CalendarFeatures {
    fn name(&self) -> &'static str {
        "calendar"
    }

    fn extract(&self, df: &DataFrame) -> Result<DataFrame> {
        let timestamps = datetime_values(df, &self.timestamp_column)?;

        let mut year = Vec::with_capacity(timestamps.len());
        let mut month = Vec::with_capacity(timestamps.len());
        let mut day = Vec::with_capacity(timestamps.len());
        let mut day_of_week = Vec::with_capacity(timestamps.len());
        let mut day_of_year = Vec::with_capacity(timestamps.len());
        let mut week_of_year = Vec::with_capacity(timestamps.len());
        let mut quarter = Vec::with_capacity(timestamps.len());

        for t in &timestamps {
            year.push(t.year());
            month.push(t.month());
            day.push(t.day());
            day_of_week.push(t.weekday().num_days_from_monday());
            day_of_year.push(t.ordinal());
            week_of_year.push(t.iso_week().week());
            quarter.push(t.month0() / 3 + 1);
        }

        let columns: Vec<Column> = vec![
            Series::new("year".into(), year).into_column(),
            Series::new("month".into(), month).into_column(),
            Series::new("day".into(), day).into_column(),
            Series::new("day_of_week".into(), day_of_week).into_column(),
            Series::new("day_of_year".into(), day_of_year).into_column(),
            Series::new("week_of_year".into(), week_of_year).into_column(),
            Series::new("quarter".into(), quarter).into_column(),
        ];
        Ok(DataFrame::new(columns)?)
    }
}
