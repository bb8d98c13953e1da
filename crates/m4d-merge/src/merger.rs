//! # Decision Merger
//!
//! Three-level outer join over decision trees:
//!
//! 1. **Datasets.** Entries sharing a dataset key are merged in the left
//!    entry's position; entries present on one side only pass through.
//! 2. **Operations.** Same rule, one level down, within a matched dataset.
//! 3. **Actions.** Within a matched operation, `left.actions ++ right.actions`.
//!    Identical actions from both sides are both kept; collapsing duplicates
//!    or resolving contradicting actions is the enforcement layer's job.
//!
//! When a non-structural matcher pairs two keys that are not identical, the
//! merged entry carries the left key.

use m4d_core::{
    AccessOperation, DatasetDecision, DatasetIdentifier, DecisionError, MalformedDecisionSet,
    OperationDecision, PolicyDecisionSet,
};

use crate::keyed::merge_keyed;
use crate::matcher::{KeyMatcher, MatchMode, ModeMatcher, StructuralMatch};
use crate::validate::validate_decision_set;

/// Merges policy decision sets.
///
/// Generic over the dataset matcher `D` and the operation matcher `O`. The
/// merger holds no state besides its configuration and may be shared across
/// threads when its matchers can.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionMerger<D = StructuralMatch, O = StructuralMatch> {
    datasets: D,
    operations: O,
    validate_inputs: bool,
}

impl DecisionMerger {
    /// A merger matching datasets and operations by structural equality.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DecisionMerger<ModeMatcher, ModeMatcher> {
    /// A merger whose matching strategy is chosen at runtime.
    pub fn from_mode(mode: MatchMode) -> Self {
        Self::with_matchers(ModeMatcher(mode), ModeMatcher(mode))
    }

    /// The active matching strategy.
    pub fn mode(&self) -> MatchMode {
        self.datasets.0
    }
}

impl<D, O> DecisionMerger<D, O>
where
    D: KeyMatcher<DatasetIdentifier>,
    O: KeyMatcher<AccessOperation>,
{
    /// A merger with custom key matchers.
    pub fn with_matchers(datasets: D, operations: O) -> Self {
        Self {
            datasets,
            operations,
            validate_inputs: false,
        }
    }

    /// Validate every input before folding it in [`crate::collect_decisions`].
    pub fn validating(mut self, validate_inputs: bool) -> Self {
        self.validate_inputs = validate_inputs;
        self
    }

    /// Whether inputs are validated before being folded from sources.
    pub fn validates_inputs(&self) -> bool {
        self.validate_inputs
    }

    /// Merge two decision sets.
    ///
    /// Total over well-formed inputs (see [`Self::validate`]). The inputs are
    /// only read; the result is a freshly built tree.
    pub fn merge(&self, left: &PolicyDecisionSet, right: &PolicyDecisionSet) -> PolicyDecisionSet {
        let datasets = merge_keyed(
            &left.datasets,
            &right.datasets,
            |l, r| self.datasets.matches(&l.dataset, &r.dataset),
            |l, r| self.merge_dataset(l, r),
        );

        tracing::debug!(
            left = left.datasets.len(),
            right = right.datasets.len(),
            shared = (left.datasets.len() + right.datasets.len()).saturating_sub(datasets.len()),
            merged = datasets.len(),
            "merged policy decision sets"
        );

        PolicyDecisionSet::new(datasets)
    }

    /// Validate both inputs, then merge them.
    ///
    /// # Errors
    ///
    /// Returns `DecisionError::Malformed` if either input repeats a dataset
    /// key, or repeats an operation key within one dataset.
    pub fn merge_checked(
        &self,
        left: &PolicyDecisionSet,
        right: &PolicyDecisionSet,
    ) -> Result<PolicyDecisionSet, DecisionError> {
        for (side, set) in [("left", left), ("right", right)] {
            if let Err(e) = self.validate(set) {
                tracing::warn!(side, error = %e, "rejecting malformed decision set");
                return Err(e.into());
            }
        }
        Ok(self.merge(left, right))
    }

    /// Fold any number of decision sets left to right.
    ///
    /// `merge_all([a, b, c])` is `merge(merge(a, b), c)`. The fold order is
    /// the iteration order, so action order in the result is reproducible
    /// for a fixed input order. An empty iterator yields the empty set.
    pub fn merge_all<'a, I>(&self, sets: I) -> PolicyDecisionSet
    where
        I: IntoIterator<Item = &'a PolicyDecisionSet>,
    {
        sets.into_iter()
            .fold(PolicyDecisionSet::empty(), |acc, set| self.merge(&acc, set))
    }

    /// Check the key-uniqueness preconditions using this merger's matchers.
    pub fn validate(&self, set: &PolicyDecisionSet) -> Result<(), MalformedDecisionSet> {
        validate_decision_set(set, &self.datasets, &self.operations)
    }

    fn merge_dataset(&self, left: &DatasetDecision, right: &DatasetDecision) -> DatasetDecision {
        let decisions = merge_keyed(
            &left.decisions,
            &right.decisions,
            |l, r| self.operations.matches(&l.operation, &r.operation),
            merge_operation,
        );
        DatasetDecision::new(left.dataset.clone(), decisions)
    }
}

fn merge_operation(left: &OperationDecision, right: &OperationDecision) -> OperationDecision {
    let mut actions = Vec::with_capacity(left.actions.len() + right.actions.len());
    actions.extend_from_slice(&left.actions);
    actions.extend_from_slice(&right.actions);
    OperationDecision::new(left.operation.clone(), actions)
}

/// Merge two decision sets with structural key matching.
pub fn merge_decision_sets(left: &PolicyDecisionSet, right: &PolicyDecisionSet) -> PolicyDecisionSet {
    DecisionMerger::new().merge(left, right)
}
