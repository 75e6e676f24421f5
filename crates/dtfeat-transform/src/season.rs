//! Season labeling from the month.

use chrono::Datelike;
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use dtfeat_model::{Result, Season};

use crate::data_utils::datetime_values;
use crate::extractor::FeatureExtractor;
use crate::frame::DEFAULT_TIMESTAMP_COLUMN;

/// Projects a categorical `season` column from the timestamp's month.
#[derive(Debug, Clone)]
pub struct SeasonFeatures {
    timestamp_column: String,
}

impl SeasonFeatures {
    pub fn new(timestamp_column: impl Into<String>) -> Self {
        Self {
            timestamp_column: timestamp_column.into(),
        }
    }
}

impl Default for SeasonFeatures {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTAMP_COLUMN)
    }
}

impl FeatureExtractor for SeasonFeatures {
    fn name(&self) -> &'static str {
        "season"
    }

    fn extract(&self, df: &DataFrame) -> Result<DataFrame> {
        let timestamps = datetime_values(df, &self.timestamp_column)?;
        let labels: Vec<String> = timestamps
            .iter()
            .map(|t| Season::from_month(t.month()).as_str().to_string())
            .collect();

        let columns: Vec<Column> = vec![Series::new("season".into(), labels).into_column()];
        Ok(DataFrame::new(columns)?)
    }
}
