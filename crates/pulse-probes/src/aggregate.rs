//! Worst-level aggregation. The same fold applies at every depth: per-group
//! results feed the system-level fold unchanged, so aggregation composes
//! without special-casing nesting.

use chrono::Utc;
use pulse_core::errors::{ConfigError, PulseResult};
use pulse_core::models::{AggregateNode, AggregateResult, ProbeResult, StatusLevel};

/// Fold child results into one aggregate. The overall level is the maximum
/// child level under `Healthy < Degraded < Error`; every worst-level child
/// stays in the tree.
///
/// An empty group is a configuration fault, never a silent `healthy`.
pub fn aggregate(
    name: impl Into<String>,
    children: Vec<AggregateNode>,
    elapsed_ms: u64,
) -> PulseResult<AggregateResult> {
    let name = name.into();
    if children.is_empty() {
        return Err(ConfigError::EmptyGroup { group: name }.into());
    }
    let status = children
        .iter()
        .map(AggregateNode::level)
        .fold(StatusLevel::Healthy, StatusLevel::max);
    Ok(AggregateResult {
        name,
        status,
        checks: children,
        elapsed_ms,
        generated_at: Utc::now(),
    })
}

/// Convenience fold over a flat batch of probe results.
pub fn aggregate_probes(
    name: impl Into<String>,
    results: Vec<ProbeResult>,
    elapsed_ms: u64,
) -> PulseResult<AggregateResult> {
    aggregate(
        name,
        results.into_iter().map(AggregateNode::Probe).collect(),
        elapsed_ms,
    )
}
