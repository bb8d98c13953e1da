//! # Error Types: Structured Error Hierarchy
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! Merging itself is total and never produces an error. Errors arise only at
//! the edges: an opt-in validation pass rejecting inputs that break the
//! uniqueness preconditions, a decision source failing to deliver, or
//! serialization of a tree for digests and output.

use thiserror::Error;

/// Top-level error type for policy decision handling.
#[derive(Error, Debug)]
pub enum DecisionError {
    /// An input decision set violates the merge preconditions.
    #[error("malformed decision set: {0}")]
    Malformed(#[from] MalformedDecisionSet),

    /// Canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// A decision source failed to produce its decisions.
    #[error("decision source {source_name:?} failed: {message}")]
    Source {
        /// Name of the failing source.
        source_name: String,
        /// Failure description reported by the source.
        message: String,
    },

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A decision set that breaks the key-uniqueness preconditions of merging.
///
/// Keys are rendered with their `Display` form so the error stays
/// independent of the matcher that detected the duplicate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedDecisionSet {
    /// Two dataset entries share the same dataset key.
    #[error("duplicate dataset {dataset}")]
    DuplicateDataset {
        /// The repeated dataset key.
        dataset: String,
    },

    /// Two operation entries within one dataset share the same operation key.
    #[error("duplicate operation {operation} in dataset {dataset}")]
    DuplicateOperation {
        /// The dataset holding the repeated operation.
        dataset: String,
        /// The repeated operation key.
        operation: String,
    },
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
