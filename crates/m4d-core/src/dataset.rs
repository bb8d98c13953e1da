//! # Dataset Identity
//!
//! The key under which a policy-compliance service reports decisions for a
//! data asset.

use serde::{Deserialize, Serialize};

/// Identifies the dataset a `DatasetDecision` applies to.
///
/// The identifier is opaque to the merger. It is compared structurally
/// unless a caller injects a narrower matcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DatasetIdentifier {
    /// Catalog-assigned dataset id.
    pub dataset_id: String,
}

impl DatasetIdentifier {
    /// Create an identifier from a dataset id.
    pub fn new(dataset_id: impl Into<String>) -> Self {
        Self {
            dataset_id: dataset_id.into(),
        }
    }

    /// Access the dataset id.
    pub fn as_str(&self) -> &str {
        &self.dataset_id
    }
}

impl std::fmt::Display for DatasetIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "dataset:{}", self.dataset_id)
    }
}
