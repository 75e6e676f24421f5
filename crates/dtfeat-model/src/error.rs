//! Error taxonomy for feature extraction.
//!
//! Three caller-facing classes, all fail-fast:
//!
//! - schema: the required timestamp column is absent
//!   ([`FeatureError::MissingTimestampColumn`])
//! - type: the timestamp column exists but cannot yield timestamps
//!   ([`FeatureError::UnsupportedColumnType`], [`FeatureError::NullTimestamp`])
//! - value: a name of the right type but outside a closed vocabulary
//!   ([`FeatureError::UnknownCycleType`], [`FeatureError::UnknownTransform`],
//!   [`FeatureError::UnknownFeatureCategory`], [`FeatureError::EmptySelection`])
//!
//! [`FeatureError::RowCountMismatch`] is a structural invariant violation in
//! the orchestrator, never the result of caller input.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("input table is missing required timestamp column '{column}'")]
    MissingTimestampColumn { column: String },

    #[error("column '{column}' has dtype {dtype}; expected a datetime column")]
    UnsupportedColumnType { column: String, dtype: String },

    #[error("null timestamp at row {row} of column '{column}'")]
    NullTimestamp { column: String, row: usize },

    #[error("unknown cycle type '{value}'; expected one of: {expected}")]
    UnknownCycleType { value: String, expected: String },

    #[error("unknown cyclic transform '{value}'; expected one of: {expected}")]
    UnknownTransform { value: String, expected: String },

    #[error("unknown feature category '{value}'; expected one of: {expected}")]
    UnknownFeatureCategory { value: String, expected: String },

    #[error("cyclic options require at least one {what}")]
    EmptySelection { what: &'static str },

    #[error("extractor '{extractor}' produced {actual} rows for {expected} input rows")]
    RowCountMismatch {
        extractor: String,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, FeatureError>;
