//! Cyclical encoding of periodic time positions.
//!
//! Each timestamp is reduced to its integer position within a cycle
//! (for example second-of-day in `0..86400`), normalized to a phase angle
//! `2π · position / period`, and passed through each configured transform.
//! One output column per `(transform, cycle type)` pair, named
//! `{transform}_{cycle_type}`, in transform-major order.

use std::f64::consts::TAU;

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

use dtfeat_model::{CyclicOptions, Result};

use crate::data_utils::datetime_values;
use crate::extractor::FeatureExtractor;
use crate::frame::DEFAULT_TIMESTAMP_COLUMN;

/// Trigonometric encoder over the configured transform × cycle-type
/// cross-product.
///
/// Vocabulary validation happens at construction; by the time `extract`
/// runs, every transform and cycle type is a resolved enum variant.
#[derive(Debug, Clone)]
pub struct CyclicalFeatures {
    timestamp_column: String,
    options: CyclicOptions,
}

impl CyclicalFeatures {
    pub fn new(timestamp_column: impl Into<String>, options: CyclicOptions) -> Self {
        Self {
            timestamp_column: timestamp_column.into(),
            options,
        }
    }

    /// Construct from string vocabularies, failing fast on any unknown
    /// transform or cycle-type name.
    pub fn from_names<T, C>(
        timestamp_column: impl Into<String>,
        transforms: &[T],
        cycle_types: &[C],
    ) -> Result<Self>
    where
        T: AsRef<str>,
        C: AsRef<str>,
    {
        let options = CyclicOptions::from_names(transforms, cycle_types)?;
        Ok(Self::new(timestamp_column, options))
    }

    pub fn options(&self) -> &CyclicOptions {
        &self.options
    }
}

impl Default for CyclicalFeatures {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTAMP_COLUMN, CyclicOptions::default())
    }
}

impl FeatureExtractor for CyclicalFeatures {
    fn name(&self) -> &'static str {
        "cyclical"
    }

    fn extract(&self, df: &DataFrame) -> Result<DataFrame> {
        let timestamps = datetime_values(df, &self.timestamp_column)?;

        let mut columns: Vec<Column> =
            Vec::with_capacity(self.options.transforms.len() * self.options.cycle_types.len());
        for transform in &self.options.transforms {
            for cycle in &self.options.cycle_types {
                // Phase stays in [0, 2π) because position < period by
                // construction.
                let period = f64::from(cycle.period());
                let values: Vec<f64> = timestamps
                    .iter()
                    .map(|t| transform.apply(TAU * f64::from(cycle.position(*t)) / period))
                    .collect();
                let name = format!("{}_{}", transform.as_str(), cycle.as_str());
                columns.push(Series::new(name.into(), values).into_column());
            }
        }
        Ok(DataFrame::new(columns)?)
    }
}
