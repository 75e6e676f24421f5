//! The extractor seam shared by all feature categories.

use polars::prelude::DataFrame;

use dtfeat_model::Result;

/// A single feature-category derivation over a normalized table.
///
/// Implementations are immutable after construction and compute every output
/// row independently from that row's timestamp, so instances may be reused
/// across calls and shared across threads.
pub trait FeatureExtractor: std::fmt::Debug + Send + Sync {
    /// Identifier for logging and error reporting.
    fn name(&self) -> &'static str;

    /// Project the timestamp column of `df` into this category's feature
    /// columns, one output row per input row.
    ///
    /// An empty input yields an empty frame with the full column schema;
    /// schema never depends on row count.
    fn extract(&self, df: &DataFrame) -> Result<DataFrame>;
}
