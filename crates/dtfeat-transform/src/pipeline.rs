//! The feature-extraction pipeline: selects extractors, runs them in order,
//! and concatenates their outputs into one table keyed by the timestamp
//! column.

use polars::prelude::{Column, DataFrame};
use tracing::debug;

use dtfeat_model::{CyclicOptions, FeatureCategory, FeatureError, FeatureSelection, Result};

use crate::business::BusinessFeatures;
use crate::calendar::CalendarFeatures;
use crate::clock::ClockFeatures;
use crate::cyclical::CyclicalFeatures;
use crate::extractor::FeatureExtractor;
use crate::frame::{DEFAULT_TIMESTAMP_COLUMN, FeatureInput, normalize_input};
use crate::season::SeasonFeatures;

/// Orchestrates the selected extractors over normalized input.
///
/// Construction goes through [`DatetimeFeatureExtractorBuilder`]; the
/// default value runs all five categories with default cyclical options
/// over a `datetime` column. Instances hold no per-call state and may be
/// reused or shared freely.
#[derive(Debug)]
pub struct DatetimeFeatureExtractor {
    timestamp_column: String,
    selected: Vec<FeatureCategory>,
    extractors: Vec<Box<dyn FeatureExtractor>>,
}

impl DatetimeFeatureExtractor {
    pub fn builder() -> DatetimeFeatureExtractorBuilder {
        DatetimeFeatureExtractorBuilder::new()
    }

    /// Categories that will run, in execution order.
    pub fn selected(&self) -> &[FeatureCategory] {
        &self.selected
    }

    pub fn timestamp_column(&self) -> &str {
        &self.timestamp_column
    }

    fn from_categories(
        timestamp_column: String,
        selected: Vec<FeatureCategory>,
        cyclic_options: CyclicOptions,
    ) -> Self {
        let extractors = selected
            .iter()
            .map(|category| -> Box<dyn FeatureExtractor> {
                let column = timestamp_column.as_str();
                match category {
                    FeatureCategory::Calendar => Box::new(CalendarFeatures::new(column)),
                    FeatureCategory::Clock => Box::new(ClockFeatures::new(column)),
                    FeatureCategory::Cyclical => {
                        Box::new(CyclicalFeatures::new(column, cyclic_options.clone()))
                    }
                    FeatureCategory::Business => Box::new(BusinessFeatures::new(column)),
                    FeatureCategory::Season => Box::new(SeasonFeatures::new(column)),
                }
            })
            .collect();
        Self {
            timestamp_column,
            selected,
            extractors,
        }
    }

    /// Run every selected extractor and concatenate the results.
    ///
    /// The output carries the original timestamp column first (the table's
    /// key), then each extractor's columns in selection order. Row order
    /// and count always match the input; a height mismatch from any
    /// extractor aborts the call rather than truncating or padding.
    pub fn extract<I>(&self, input: I) -> Result<DataFrame>
    where
        I: Into<FeatureInput>,
    {
        let df = normalize_input(input.into(), &self.timestamp_column)?;
        let height = df.height();
        debug!(rows = height, extractors = self.extractors.len(), "extracting features");

        let mut columns: Vec<Column> = vec![df.column(&self.timestamp_column)?.clone()];
        for extractor in &self.extractors {
            let features = extractor.extract(&df)?;
            if features.height() != height {
                return Err(FeatureError::RowCountMismatch {
                    extractor: extractor.name().to_string(),
                    expected: height,
                    actual: features.height(),
                });
            }
            columns.extend(features.get_columns().iter().cloned());
        }
        Ok(DataFrame::new(columns)?)
    }
}

impl Default for DatetimeFeatureExtractor {
    fn default() -> Self {
        Self::from_categories(
            DEFAULT_TIMESTAMP_COLUMN.to_string(),
            FeatureCategory::ALL.to_vec(),
            CyclicOptions::default(),
        )
    }
}

/// Builder for [`DatetimeFeatureExtractor`].
///
/// Selections accept either [`FeatureCategory`] values or string names
/// (case-insensitive); unknown names are rejected at [`build`]. Selecting
/// the same category twice collapses to a single extractor at the first
/// occurrence's position, with the one shared configuration applying.
///
/// [`build`]: DatetimeFeatureExtractorBuilder::build
#[derive(Debug, Clone, Default)]
pub struct DatetimeFeatureExtractorBuilder {
    timestamp_column: Option<String>,
    selections: Option<Vec<FeatureSelection>>,
    cyclic_options: Option<CyclicOptions>,
}

impl DatetimeFeatureExtractorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timestamp_column(mut self, column: impl Into<String>) -> Self {
        self.timestamp_column = Some(column.into());
        self
    }

    /// Select the feature categories to run, in order. Defaults to all
    /// five categories when not called.
    pub fn features<I, S>(mut self, selections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FeatureSelection>,
    {
        self.selections = Some(selections.into_iter().map(Into::into).collect());
        self
    }

    /// Configure the cyclical encoder. Defaults to sin/cos over
    /// second-of-day and minute-of-day.
    pub fn cyclic_options(mut self, options: CyclicOptions) -> Self {
        self.cyclic_options = Some(options);
        self
    }

    /// Resolve selections and construct the pipeline.
    ///
    /// Fails fast on any unknown category name, before any data is seen.
    pub fn build(self) -> Result<DatetimeFeatureExtractor> {
        let timestamp_column = self
            .timestamp_column
            .unwrap_or_else(|| DEFAULT_TIMESTAMP_COLUMN.to_string());
        let selections = self
            .selections
            .unwrap_or_else(|| FeatureCategory::ALL.map(FeatureSelection::from).to_vec());

        let mut selected: Vec<FeatureCategory> = Vec::with_capacity(selections.len());
        for selection in &selections {
            let category = selection.resolve()?;
            if selected.contains(&category) {
                debug!(category = %category, "duplicate selection collapsed");
            } else {
                selected.push(category);
            }
        }

        Ok(DatetimeFeatureExtractor::from_categories(
            timestamp_column,
            selected,
            self.cyclic_options.unwrap_or_default(),
        ))
    }
}
