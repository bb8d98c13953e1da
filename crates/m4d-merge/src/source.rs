//! # Decision Sources
//!
//! A [`DecisionSource`] is anything that can hand the merger a decision set:
//! a client for a remote policy-compliance service, a file on disk, or a
//! fixed in-memory set. Fetching, transport failures, and retries belong to
//! the source; this module only fixes the order in which results are folded.

use m4d_core::{AccessOperation, DatasetIdentifier, DecisionError, PolicyDecisionSet};

use crate::matcher::KeyMatcher;
use crate::merger::DecisionMerger;

/// Supplier of one policy decision set.
pub trait DecisionSource {
    /// Name used in logs and errors.
    fn name(&self) -> &str;

    /// Produce this source's decisions.
    fn decisions(&self) -> Result<PolicyDecisionSet, DecisionError>;
}

/// A source returning a fixed decision set.
#[derive(Debug, Clone)]
pub struct StaticSource {
    name: String,
    set: PolicyDecisionSet,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, set: PolicyDecisionSet) -> Self {
        Self {
            name: name.into(),
            set,
        }
    }
}

impl DecisionSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn decisions(&self) -> Result<PolicyDecisionSet, DecisionError> {
        Ok(self.set.clone())
    }
}

/// Query every source in order and fold the results left to right.
///
/// The first source that fails aborts the fold. When the merger validates
/// inputs, each fetched set is checked before it is folded in, and a
/// malformed set aborts the fold as well.
pub fn collect_decisions<D, O>(
    merger: &DecisionMerger<D, O>,
    sources: &[&dyn DecisionSource],
) -> Result<PolicyDecisionSet, DecisionError>
where
    D: KeyMatcher<DatasetIdentifier>,
    O: KeyMatcher<AccessOperation>,
{
    let mut merged = PolicyDecisionSet::empty();
    for source in sources {
        let set = source.decisions()?;
        if merger.validates_inputs() {
            if let Err(e) = merger.validate(&set) {
                tracing::warn!(source = source.name(), error = %e, "decision source returned a malformed set");
                return Err(e.into());
            }
        }
        tracing::debug!(
            source = source.name(),
            datasets = set.len(),
            actions = set.action_count(),
            "folding decisions"
        );
        merged = merger.merge(&merged, &set);
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use m4d_core::{ActionLevel, DatasetDecision, EnforcementAction, MalformedDecisionSet, OperationDecision};

    struct Unreachable;

    impl DecisionSource for Unreachable {
        fn name(&self) -> &str {
            "unreachable"
        }

        fn decisions(&self) -> Result<PolicyDecisionSet, DecisionError> {
            Err(DecisionError::Source {
                source_name: self.name().into(),
                message: "connection refused".into(),
            })
        }
    }

    fn read_set(dataset: &str, action_id: &str) -> PolicyDecisionSet {
        PolicyDecisionSet::new(vec![DatasetDecision::new(
            DatasetIdentifier::new(dataset),
            vec![OperationDecision::new(
                AccessOperation::read(),
                vec![EnforcementAction::new(action_id, action_id, ActionLevel::Dataset)],
            )],
        )])
    }

    #[test]
    fn folds_sources_in_order() {
        let first = StaticSource::new("first", read_set("1", "a"));
        let second = StaticSource::new("second", read_set("1", "b"));
        let merger = DecisionMerger::new();

        let merged = collect_decisions(&merger, &[&first, &second]).unwrap();
        let ids: Vec<&str> = merged.datasets[0].decisions[0]
            .actions
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, ["a", "b"]);

        let reversed = collect_decisions(&merger, &[&second, &first]).unwrap();
        assert_ne!(merged, reversed);
    }

    #[test]
    fn no_sources_yield_empty_set() {
        let merged = collect_decisions(&DecisionMerger::new(), &[]).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn failing_source_aborts() {
        let ok = StaticSource::new("ok", read_set("1", "a"));
        let err = collect_decisions(&DecisionMerger::new(), &[&ok, &Unreachable]).unwrap_err();
        match err {
            DecisionError::Source { source_name, .. } => assert_eq!(source_name, "unreachable"),
            other => panic!("expected Source error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_source_rejected_only_when_validating() {
        let mut set = read_set("1", "a");
        set.datasets.push(set.datasets[0].clone());
        let bad = StaticSource::new("bad", set);

        assert!(collect_decisions(&DecisionMerger::new(), &[&bad]).is_ok());

        let err = collect_decisions(&DecisionMerger::new().validating(true), &[&bad]).unwrap_err();
        assert!(matches!(
            err,
            DecisionError::Malformed(MalformedDecisionSet::DuplicateDataset { .. })
        ));
    }
}
