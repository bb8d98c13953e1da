//! # Decision Trees
//!
//! The three container levels of a policy decision tree. Each level owns its
//! children exclusively and keeps them in the order the producing service
//! (or the merger) emitted them. Order is significant: the enforcement layer
//! applies actions in sequence.
//!
//! Key uniqueness (one entry per dataset, one entry per operation within a
//! dataset) is NOT enforced by these types. It is a precondition of merging
//! and is checked by the validation pass in `m4d-merge` on request.

use serde::{Deserialize, Serialize};

use crate::action::EnforcementAction;
use crate::canonical::CanonicalBytes;
use crate::dataset::DatasetIdentifier;
use crate::digest::{sha256_digest, ContentDigest};
use crate::error::DecisionError;
use crate::operation::AccessOperation;

/// Enforcement actions for one access operation on a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperationDecision {
    /// The operation these actions apply to.
    pub operation: AccessOperation,
    /// Actions in application order.
    #[serde(default, alias = "enforcement_actions")]
    pub actions: Vec<EnforcementAction>,
}

impl OperationDecision {
    pub fn new(operation: AccessOperation, actions: Vec<EnforcementAction>) -> Self {
        Self { operation, actions }
    }
}

/// All operation-scoped decisions for one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetDecision {
    /// The dataset these decisions apply to.
    pub dataset: DatasetIdentifier,
    /// One entry per operation.
    #[serde(default)]
    pub decisions: Vec<OperationDecision>,
}

impl DatasetDecision {
    pub fn new(dataset: DatasetIdentifier, decisions: Vec<OperationDecision>) -> Self {
        Self { dataset, decisions }
    }

    /// Find the decision for an operation by structural equality.
    pub fn get(&self, operation: &AccessOperation) -> Option<&OperationDecision> {
        self.decisions.iter().find(|d| &d.operation == operation)
    }
}

/// Root of a decision tree: every dataset decision a service returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolicyDecisionSet {
    /// One entry per dataset.
    #[serde(default, alias = "dataset_decisions")]
    pub datasets: Vec<DatasetDecision>,
}

impl PolicyDecisionSet {
    pub fn new(datasets: Vec<DatasetDecision>) -> Self {
        Self { datasets }
    }

    /// A decision set with no datasets. The identity element of merging.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Number of dataset entries.
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// Find the decision for a dataset by structural equality.
    pub fn get(&self, dataset: &DatasetIdentifier) -> Option<&DatasetDecision> {
        self.datasets.iter().find(|d| &d.dataset == dataset)
    }

    /// Total number of enforcement actions across the whole tree.
    pub fn action_count(&self) -> usize {
        self.datasets
            .iter()
            .flat_map(|d| d.decisions.iter())
            .map(|o| o.actions.len())
            .sum()
    }

    /// SHA-256 digest of the canonical (RFC 8785) form of this tree.
    ///
    /// Entry order is part of the digest: two trees holding the same actions
    /// in a different order have different digests.
    pub fn digest(&self) -> Result<ContentDigest, DecisionError> {
        let canonical = CanonicalBytes::new(self)?;
        Ok(sha256_digest(&canonical))
    }
}
