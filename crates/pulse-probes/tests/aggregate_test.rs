//! Aggregation tests: worst-level fold, loud empty groups, associativity,
//! idempotent re-aggregation.

use proptest::prelude::*;

use pulse_core::errors::PulseError;
use pulse_core::models::{
    AggregateNode, Measurement, Observation, ProbeResult, StatusLevel,
};
use pulse_probes::{aggregate, aggregate_probes};

fn probe(name: &str, status: StatusLevel) -> ProbeResult {
    ProbeResult::new(
        name,
        status,
        None,
        Measurement::new(Observation::QueryTiming, 5),
    )
}

// ---------------------------------------------------------------------------
// Worst level wins
// ---------------------------------------------------------------------------

#[test]
fn degraded_child_degrades_the_group() {
    let agg = aggregate_probes(
        "system",
        vec![
            probe("a", StatusLevel::Healthy),
            probe("b", StatusLevel::Degraded),
            probe("c", StatusLevel::Healthy),
        ],
        10,
    )
    .unwrap();
    assert_eq!(agg.status, StatusLevel::Degraded);
}

#[test]
fn error_child_wins_over_degraded() {
    let agg = aggregate_probes(
        "system",
        vec![
            probe("a", StatusLevel::Healthy),
            probe("b", StatusLevel::Error),
            probe("c", StatusLevel::Degraded),
        ],
        10,
    )
    .unwrap();
    assert_eq!(agg.status, StatusLevel::Error);
}

#[test]
fn all_worst_level_children_are_retained() {
    let agg = aggregate_probes(
        "system",
        vec![
            probe("a", StatusLevel::Error),
            probe("b", StatusLevel::Error),
            probe("c", StatusLevel::Healthy),
        ],
        10,
    )
    .unwrap();
    let summary = agg.summary();
    assert_eq!(summary.error, 2);
    assert_eq!(summary.failures.len(), 2);
}

#[test]
fn empty_group_is_a_configuration_fault() {
    let result = aggregate("empty", vec![], 0);
    assert!(matches!(result, Err(PulseError::Config(_))));
}

#[test]
fn child_order_is_preserved() {
    let agg = aggregate_probes(
        "system",
        vec![
            probe("first", StatusLevel::Healthy),
            probe("second", StatusLevel::Error),
            probe("third", StatusLevel::Healthy),
        ],
        10,
    )
    .unwrap();
    let names: Vec<&str> = agg.checks.iter().map(|c| c.name()).collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

// ---------------------------------------------------------------------------
// Composition: the same fold at every depth
// ---------------------------------------------------------------------------

#[test]
fn nested_fold_equals_flat_fold() {
    let levels = vec![
        StatusLevel::Healthy,
        StatusLevel::Degraded,
        StatusLevel::Healthy,
        StatusLevel::Error,
    ];

    let flat = aggregate_probes(
        "system",
        levels
            .iter()
            .enumerate()
            .map(|(i, level)| probe(&format!("p{i}"), *level))
            .collect(),
        10,
    )
    .unwrap();

    let left = aggregate_probes(
        "left",
        vec![probe("p0", levels[0]), probe("p1", levels[1])],
        5,
    )
    .unwrap();
    let right = aggregate_probes(
        "right",
        vec![probe("p2", levels[2]), probe("p3", levels[3])],
        5,
    )
    .unwrap();
    let nested = aggregate(
        "system",
        vec![AggregateNode::Group(left), AggregateNode::Group(right)],
        10,
    )
    .unwrap();

    assert_eq!(nested.status, flat.status);
}

#[test]
fn reaggregating_a_produced_tree_reproduces_the_level() {
    let agg = aggregate_probes(
        "system",
        vec![
            probe("a", StatusLevel::Degraded),
            probe("b", StatusLevel::Healthy),
        ],
        10,
    )
    .unwrap();
    let level = agg.status;

    let again = aggregate("system", agg.checks.clone(), agg.elapsed_ms).unwrap();
    assert_eq!(again.status, level);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn level_strategy() -> impl Strategy<Value = StatusLevel> {
    prop_oneof![
        Just(StatusLevel::Healthy),
        Just(StatusLevel::Degraded),
        Just(StatusLevel::Error),
    ]
}

proptest! {
    #[test]
    fn prop_level_is_max_of_children(levels in prop::collection::vec(level_strategy(), 1..20)) {
        let expected = levels.iter().copied().max().unwrap();
        let agg = aggregate_probes(
            "system",
            levels
                .iter()
                .enumerate()
                .map(|(i, level)| probe(&format!("p{i}"), *level))
                .collect(),
            1,
        )
        .unwrap();
        prop_assert_eq!(agg.status, expected);
    }

    #[test]
    fn prop_fold_is_associative(
        levels in prop::collection::vec(level_strategy(), 2..20),
        split in 1usize..19,
    ) {
        let split = split.min(levels.len() - 1);

        let flat = aggregate_probes(
            "system",
            levels
                .iter()
                .enumerate()
                .map(|(i, level)| probe(&format!("p{i}"), *level))
                .collect(),
            1,
        )
        .unwrap();

        let left = aggregate_probes(
            "left",
            levels[..split]
                .iter()
                .enumerate()
                .map(|(i, level)| probe(&format!("p{i}"), *level))
                .collect(),
            1,
        )
        .unwrap();
        let right = aggregate_probes(
            "right",
            levels[split..]
                .iter()
                .enumerate()
                .map(|(i, level)| probe(&format!("q{i}"), *level))
                .collect(),
            1,
        )
        .unwrap();
        let nested = aggregate(
            "system",
            vec![AggregateNode::Group(left), AggregateNode::Group(right)],
            1,
        )
        .unwrap();

        prop_assert_eq!(nested.status, flat.status);
    }
}
