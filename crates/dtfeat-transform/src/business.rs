//! Business-calendar flags: weekend, month-end, year-end.

use chrono::{Datelike, NaiveDate};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use dtfeat_model::Result;

use crate::data_utils::datetime_values;
use crate::extractor::FeatureExtractor;
use crate::frame::DEFAULT_TIMESTAMP_COLUMN;

/// Projects boolean business-calendar flags from the timestamp column.
///
/// Output columns, in order: `is_weekend` (Saturday or Sunday),
/// `is_month_end` (last calendar day of the month), `is_year_end`
/// (December 31).
#[derive(Debug, Clone)]
pub struct BusinessFeatures {
    timestamp_column: String,
}

impl BusinessFeatures {
    pub fn new(timestamp_column: impl Into<String>) -> Self {
        Self {
            timestamp_column: timestamp_column.into(),
        }
    }
}

impl Default for BusinessFeatures {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTAMP_COLUMN)
    }
}

/// True when `date` is the last calendar day of its month.
fn is_month_end(date: NaiveDate) -> bool {
    match date.succ_opt() {
        Some(next) => next.month() != date.month(),
        // NaiveDate::MAX is December 31.
        None => true,
    }
}

impl FeatureExtractor for BusinessFeatures {
    fn name(&self) -> &'static str {
        "business"
    }

    fn extract(&self, df: &DataFrame) -> Result<DataFrame> {
        let timestamps = datetime_values(df, &self.timestamp_column)?;

        let mut is_weekend = Vec::with_capacity(timestamps.len());
        let mut month_end = Vec::with_capacity(timestamps.len());
        let mut year_end = Vec::with_capacity(timestamps.len());

        for t in &timestamps {
            let date = t.date();
            is_weekend.push(date.weekday().num_days_from_monday() >= 5);
            month_end.push(is_month_end(date));
            year_end.push(date.month() == 12 && date.day() == 31);
        }

        let columns: Vec<Column> = vec![
            Series::new("is_weekend".into(), is_weekend).into_column(),
            Series::new("is_month_end".into(), month_end).into_column(),
            Series::new("is_year_end".into(), year_end).into_column(),
        ];
        Ok(DataFrame::new(columns)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_end_handles_varying_lengths() {
        assert!(is_month_end(NaiveDate::from_ymd_opt(2023, 6, 30).unwrap()));
        assert!(is_month_end(NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()));
        assert!(is_month_end(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(!is_month_end(NaiveDate::from_ymd_opt(2024, 2, 28).unwrap()));
        assert!(!is_month_end(NaiveDate::from_ymd_opt(2023, 6, 29).unwrap()));
        assert!(is_month_end(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()));
    }
}
