//! # Precondition Validation
//!
//! Merging assumes each input holds at most one entry per dataset key and,
//! within a dataset, at most one entry per operation key. The merger does
//! not defend against violations; callers that receive trees from untrusted
//! services run this pass first and reject malformed input.
//!
//! Uniqueness is judged with the same matchers the merger uses, so a tree
//! that is valid under structural matching may be malformed under
//! primary-key matching.

use m4d_core::{AccessOperation, DatasetIdentifier, MalformedDecisionSet, PolicyDecisionSet};

use crate::matcher::KeyMatcher;

/// Check the key-uniqueness preconditions of merging.
///
/// Reports the first violation in document order: the later of the two
/// colliding entries is the one named.
pub fn validate_decision_set<D, O>(
    set: &PolicyDecisionSet,
    datasets: &D,
    operations: &O,
) -> Result<(), MalformedDecisionSet>
where
    D: KeyMatcher<DatasetIdentifier>,
    O: KeyMatcher<AccessOperation>,
{
    for (i, entry) in set.datasets.iter().enumerate() {
        if set.datasets[..i]
            .iter()
            .any(|earlier| datasets.matches(&earlier.dataset, &entry.dataset))
        {
            return Err(MalformedDecisionSet::DuplicateDataset {
                dataset: entry.dataset.to_string(),
            });
        }

        for (j, decision) in entry.decisions.iter().enumerate() {
            if entry.decisions[..j]
                .iter()
                .any(|earlier| operations.matches(&earlier.operation, &decision.operation))
            {
                return Err(MalformedDecisionSet::DuplicateOperation {
                    dataset: entry.dataset.to_string(),
                    operation: decision.operation.to_string(),
                });
            }
        }
    }
    Ok(())
}
