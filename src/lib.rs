#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// CLI runners shared by the binaries.
pub mod app;
/// Record classifier and normalizer pipeline.
pub mod classifier;
/// Centralized constants used across classification, sinks, and loading.
pub mod constants;
/// Balanced labeled sample loading.
pub mod loader;
/// Text normalization helpers.
pub mod normalize;
/// Review record extraction and sentiment bucketing.
pub mod record;
/// Append-only sentiment sink pair.
pub mod sink;
/// Shared type aliases.
pub mod types;

mod errors;

pub use classifier::{split_reviews, RunSummary};
pub use errors::CorpusError;
pub use loader::{load_balanced_sample, BalancedSampleSpec, LabeledSample};
pub use normalize::normalize_review;
pub use record::{ReviewRecord, Sentiment};
pub use sink::{SentimentSinks, SinkPaths};
pub use types::{FieldName, NormalizedText, Rating, ReviewText};
