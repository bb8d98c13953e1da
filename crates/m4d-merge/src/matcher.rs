//! # Key Matchers
//!
//! Decides when an entry from the left tree and an entry from the right tree
//! describe the same dataset (or the same operation) and must be merged.
//!
//! Compliance services report keys as whole protocol messages, so the default
//! is full structural equality. Deployments whose services disagree on
//! secondary fields (e.g. one service fills in a copy destination and another
//! does not) can match on the primary field only.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use m4d_core::{AccessOperation, DatasetIdentifier, DecisionError};

/// Equality predicate used to pair keys across two decision trees.
pub trait KeyMatcher<K> {
    /// Returns `true` if `left` and `right` denote the same entry.
    fn matches(&self, left: &K, right: &K) -> bool;
}

impl<K, F> KeyMatcher<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    fn matches(&self, left: &K, right: &K) -> bool {
        self(left, right)
    }
}

/// Full structural equality of the key message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructuralMatch;

impl<K: PartialEq> KeyMatcher<K> for StructuralMatch {
    fn matches(&self, left: &K, right: &K) -> bool {
        left == right
    }
}

/// Matches datasets by `dataset_id` alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetIdMatch;

impl KeyMatcher<DatasetIdentifier> for DatasetIdMatch {
    fn matches(&self, left: &DatasetIdentifier, right: &DatasetIdentifier) -> bool {
        left.dataset_id == right.dataset_id
    }
}

/// Matches operations by `access_type` alone, ignoring the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessTypeMatch;

impl KeyMatcher<AccessOperation> for AccessTypeMatch {
    fn matches(&self, left: &AccessOperation, right: &AccessOperation) -> bool {
        left.access_type == right.access_type
    }
}

/// Named matching strategy, selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Keys match when the whole key message is equal.
    #[default]
    Structural,
    /// Keys match on their primary field: `dataset_id` for datasets,
    /// `access_type` for operations.
    PrimaryKey,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::PrimaryKey => "primary_key",
        }
    }
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = DecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "structural" => Ok(Self::Structural),
            "primary_key" | "primary-key" => Ok(Self::PrimaryKey),
            other => Err(DecisionError::Serialization(format!(
                "unknown match mode: {other:?}"
            ))),
        }
    }
}

/// Matcher driven by a runtime [`MatchMode`], for both key types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeMatcher(pub MatchMode);

impl KeyMatcher<DatasetIdentifier> for ModeMatcher {
    fn matches(&self, left: &DatasetIdentifier, right: &DatasetIdentifier) -> bool {
        match self.0 {
            MatchMode::Structural => StructuralMatch.matches(left, right),
            MatchMode::PrimaryKey => DatasetIdMatch.matches(left, right),
        }
    }
}

impl KeyMatcher<AccessOperation> for ModeMatcher {
    fn matches(&self, left: &AccessOperation, right: &AccessOperation) -> bool {
        match self.0 {
            MatchMode::Structural => StructuralMatch.matches(left, right),
            MatchMode::PrimaryKey => AccessTypeMatch.matches(left, right),
        }
    }
}
