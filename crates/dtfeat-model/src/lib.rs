//! Data-model definitions for datetime feature extraction.
//!
//! This crate holds the closed vocabularies (feature categories, cycle
//! types, cyclic transforms, seasons), the cyclical-encoder configuration,
//! and the shared error taxonomy. The processing logic lives in
//! `dtfeat-transform`.

pub mod enums;
pub mod error;
pub mod options;

pub use enums::{CycleType, CyclicTransform, FeatureCategory, FeatureSelection, Season, period};
pub use error::{FeatureError, Result};
pub use options::CyclicOptions;
