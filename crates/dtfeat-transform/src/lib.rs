//! Datetime feature extraction.
//!
//! This crate derives calendar and time-of-day features from timestamp
//! columns:
//!
//! - **frame**: input normalization (single timestamp, sequence, or table)
//! - **data_utils**: timestamp column access and validation
//! - **calendar / clock / business / season**: direct field projections
//! - **cyclical**: trigonometric encodings of periodic time positions
//! - **pipeline**: the orchestrator composing selected extractors into one
//!   feature table
//!
//! ```
//! use chrono::NaiveDate;
//! use dtfeat_transform::DatetimeFeatureExtractor;
//!
//! let extractor = DatetimeFeatureExtractor::default();
//! let t = NaiveDate::from_ymd_opt(2023, 1, 1)
//!     .unwrap()
//!     .and_hms_opt(12, 30, 15)
//!     .unwrap();
//! let features = extractor.extract(t).unwrap();
//! assert_eq!(features.height(), 1);
//! ```

pub mod business;
pub mod calendar;
pub mod clock;
pub mod cyclical;
pub mod data_utils;
pub mod extractor;
pub mod frame;
pub mod pipeline;
pub mod season;

pub use business::BusinessFeatures;
pub use calendar::CalendarFeatures;
pub use clock::ClockFeatures;
pub use cyclical::CyclicalFeatures;
pub use extractor::FeatureExtractor;
pub use frame::{DEFAULT_TIMESTAMP_COLUMN, FeatureInput, normalize_input};
pub use pipeline::{DatetimeFeatureExtractor, DatetimeFeatureExtractorBuilder};
pub use season::SeasonFeatures;
