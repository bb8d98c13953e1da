//! # Merge Scenarios
//!
//! End-to-end checks of the merger against decision trees shaped the way
//! policy-compliance services return them.

use std::sync::Arc;

use m4d_core::{
    AccessOperation, ActionLevel, DatasetDecision, DatasetIdentifier, EnforcementAction,
    OperationDecision, PolicyDecisionSet,
};
use m4d_merge::{collect_decisions, merge_decision_sets, DecisionMerger, MatchMode, StaticSource};

fn remove_column(column: &str) -> EnforcementAction {
    EnforcementAction::new("remove column", "remove-ID", ActionLevel::Column)
        .with_arg("column_name", column)
}

fn redact_column(column: &str) -> EnforcementAction {
    EnforcementAction::new("redact column", "redact-ID", ActionLevel::Column)
        .with_arg("column_name", column)
}

fn decisions(dataset: &str, entries: Vec<(AccessOperation, Vec<EnforcementAction>)>) -> DatasetDecision {
    DatasetDecision::new(
        DatasetIdentifier::new(dataset),
        entries
            .into_iter()
            .map(|(op, actions)| OperationDecision::new(op, actions))
            .collect(),
    )
}

// ---------------------------------------------------------------------------
// Scenario A: same dataset, same operation
// ---------------------------------------------------------------------------

#[test]
fn scenario_same_dataset_same_operation() {
    let left = PolicyDecisionSet::new(vec![decisions(
        "1",
        vec![(AccessOperation::read(), vec![remove_column("col1")])],
    )]);
    let right = PolicyDecisionSet::new(vec![decisions(
        "1",
        vec![(AccessOperation::read(), vec![redact_column("col1")])],
    )]);

    let expected = PolicyDecisionSet::new(vec![decisions(
        "1",
        vec![(
            AccessOperation::read(),
            vec![remove_column("col1"), redact_column("col1")],
        )],
    )]);
    assert_eq!(merge_decision_sets(&left, &right), expected);
}

// ---------------------------------------------------------------------------
// Scenario B: same dataset, different operations
// ---------------------------------------------------------------------------

#[test]
fn scenario_same_dataset_different_operations() {
    let left = PolicyDecisionSet::new(vec![decisions(
        "1",
        vec![(AccessOperation::read(), vec![remove_column("col1")])],
    )]);
    let right = PolicyDecisionSet::new(vec![decisions(
        "1",
        vec![(AccessOperation::write(), vec![remove_column("col1")])],
    )]);

    let expected = PolicyDecisionSet::new(vec![decisions(
        "1",
        vec![
            (AccessOperation::read(), vec![remove_column("col1")]),
            (AccessOperation::write(), vec![remove_column("col1")]),
        ],
    )]);
    assert_eq!(merge_decision_sets(&left, &right), expected);
}

// ---------------------------------------------------------------------------
// Scenario C: different datasets
// ---------------------------------------------------------------------------

#[test]
fn scenario_two_datasets() {
    let left = PolicyDecisionSet::new(vec![decisions(
        "1",
        vec![(AccessOperation::read(), vec![remove_column("col1")])],
    )]);
    let right = PolicyDecisionSet::new(vec![decisions(
        "2",
        vec![(AccessOperation::read(), vec![remove_column("col1")])],
    )]);

    let expected = PolicyDecisionSet::new(vec![
        decisions("1", vec![(AccessOperation::read(), vec![remove_column("col1")])]),
        decisions("2", vec![(AccessOperation::read(), vec![remove_column("col1")])]),
    ]);
    assert_eq!(merge_decision_sets(&left, &right), expected);
}

// ---------------------------------------------------------------------------
// Mixed shapes
// ---------------------------------------------------------------------------

#[test]
fn mixed_overlap_orders_left_then_right_extras() {
    let left = PolicyDecisionSet::new(vec![
        decisions("orders", vec![(AccessOperation::read(), vec![remove_column("ssn")])]),
        decisions("customers", vec![(AccessOperation::copy(), vec![remove_column("email")])]),
    ]);
    let right = PolicyDecisionSet::new(vec![
        decisions("payments", vec![(AccessOperation::read(), vec![redact_column("iban")])]),
        decisions(
            "orders",
            vec![
                (AccessOperation::write(), vec![redact_column("address")]),
                (AccessOperation::read(), vec![redact_column("phone")]),
            ],
        ),
    ]);

    let merged = merge_decision_sets(&left, &right);
    let ids: Vec<&str> = merged.datasets.iter().map(|d| d.dataset.as_str()).collect();
    assert_eq!(ids, ["orders", "customers", "payments"]);

    let orders = &merged.datasets[0];
    assert_eq!(
        orders.decisions,
        vec![
            OperationDecision::new(
                AccessOperation::read(),
                vec![remove_column("ssn"), redact_column("phone")]
            ),
            OperationDecision::new(AccessOperation::write(), vec![redact_column("address")]),
        ]
    );
    assert_eq!(merged.datasets[1], left.datasets[1]);
    assert_eq!(merged.datasets[2], right.datasets[0]);
}

#[test]
fn merge_of_wire_decoded_sets() {
    let left: PolicyDecisionSet = serde_json::from_str(
        r#"{"datasets":[{"dataset":{"dataset_id":"1"},"decisions":[
            {"operation":{"access_type":"READ"},"actions":[
                {"name":"remove column","id":"remove-ID","level":"COLUMN","args":{"column_name":"col1"}}
            ]}
        ]}]}"#,
    )
    .unwrap();
    let right: PolicyDecisionSet = serde_json::from_str(
        r#"{"dataset_decisions":[{"dataset":{"dataset_id":"1"},"decisions":[
            {"operation":{"access_type":"READ"},"enforcement_actions":[
                {"name":"redact column","id":"redact-ID","level":"COLUMN","args":{"column_name":"col1"}}
            ]}
        ]}]}"#,
    )
    .unwrap();

    let merged = merge_decision_sets(&left, &right);
    let json = serde_json::to_value(&merged).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"datasets":[{"dataset":{"dataset_id":"1"},"decisions":[
            {"operation":{"access_type":"READ"},"actions":[
                {"name":"remove column","id":"remove-ID","level":"COLUMN","args":{"column_name":"col1"}},
                {"name":"redact column","id":"redact-ID","level":"COLUMN","args":{"column_name":"col1"}}
            ]}
        ]}]})
    );
}

// ---------------------------------------------------------------------------
// Folding many services
// ---------------------------------------------------------------------------

#[test]
fn three_services_fold_reproducibly() {
    let services = [
        StaticSource::new(
            "column-policies",
            PolicyDecisionSet::new(vec![decisions(
                "1",
                vec![(AccessOperation::read(), vec![remove_column("col1")])],
            )]),
        ),
        StaticSource::new(
            "privacy-policies",
            PolicyDecisionSet::new(vec![decisions(
                "1",
                vec![(AccessOperation::read(), vec![redact_column("col2")])],
            )]),
        ),
        StaticSource::new(
            "geo-policies",
            PolicyDecisionSet::new(vec![decisions(
                "1",
                vec![(
                    AccessOperation::copy().with_destination("us-east"),
                    vec![EnforcementAction::new("deny", "deny-ID", ActionLevel::Dataset)],
                )],
            )]),
        ),
    ];
    let sources: Vec<&dyn m4d_merge::DecisionSource> =
        services.iter().map(|s| s as &dyn m4d_merge::DecisionSource).collect();

    let merger = DecisionMerger::new();
    let first = collect_decisions(&merger, &sources).unwrap();
    let second = collect_decisions(&merger, &sources).unwrap();
    assert_eq!(first.digest().unwrap(), second.digest().unwrap());
    assert_eq!(first.action_count(), 3);
    assert_eq!(first.datasets[0].decisions.len(), 2);
}

#[test]
fn primary_key_mode_collapses_destinations() {
    let left = PolicyDecisionSet::new(vec![decisions(
        "1",
        vec![(AccessOperation::copy().with_destination("eu"), vec![remove_column("a")])],
    )]);
    let right = PolicyDecisionSet::new(vec![decisions(
        "1",
        vec![(AccessOperation::copy().with_destination("us"), vec![remove_column("b")])],
    )]);

    let structural = DecisionMerger::from_mode(MatchMode::Structural).merge(&left, &right);
    assert_eq!(structural.datasets[0].decisions.len(), 2);

    let primary = DecisionMerger::from_mode(MatchMode::PrimaryKey).merge(&left, &right);
    assert_eq!(primary.datasets[0].decisions.len(), 1);
    assert_eq!(
        primary.datasets[0].decisions[0].operation,
        AccessOperation::copy().with_destination("eu")
    );
}

#[test]
fn independent_merges_run_concurrently() {
    let merger = Arc::new(DecisionMerger::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let merger = Arc::clone(&merger);
            std::thread::spawn(move || {
                let left = PolicyDecisionSet::new(vec![decisions(
                    &i.to_string(),
                    vec![(AccessOperation::read(), vec![remove_column("a")])],
                )]);
                let right = PolicyDecisionSet::new(vec![decisions(
                    &i.to_string(),
                    vec![(AccessOperation::read(), vec![remove_column("b")])],
                )]);
                merger.merge(&left, &right)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let merged = handle.join().unwrap();
        assert_eq!(merged.datasets[0].dataset, DatasetIdentifier::new(i.to_string()));
        assert_eq!(merged.action_count(), 2);
    }
}
