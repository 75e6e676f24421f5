//! CLI library components for the datetime feature extractor.

pub mod logging;
