//! Group orchestration shared by the handlers: build a group's probes, fan
//! them out, fold into a report.

use std::sync::Arc;
use std::time::Instant;

use pulse_core::errors::PulseResult;
use pulse_core::models::{AggregateNode, AggregateResult, StatusReport};
use pulse_probes::{aggregate, aggregate_probes, groups};

use crate::state::ServerState;

/// The probe groups this service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeGroup {
    Database,
    Search,
    Performance,
}

impl ProbeGroup {
    pub fn name(self) -> &'static str {
        match self {
            ProbeGroup::Database => "database",
            ProbeGroup::Search => "full_text_search",
            ProbeGroup::Performance => "performance",
        }
    }
}

/// Run one group and fold its results.
pub async fn run_group(state: &Arc<ServerState>, group: ProbeGroup) -> PulseResult<AggregateResult> {
    let started = Instant::now();
    let probes = match group {
        ProbeGroup::Database => groups::database_probes(&state.pool, &state.config.store)?,
        ProbeGroup::Search => {
            groups::search_probes(&state.pool, &state.config.store, &state.config.search)?
        }
        ProbeGroup::Performance => groups::performance_probes(
            &state.pool,
            &state.config.store,
            &state.config.performance,
        )?,
    };
    let results = state.runner.run(probes).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;
    aggregate_probes(group.name(), results, elapsed_ms)
}

/// Run every group concurrently and fold the group results once more into
/// the system-level aggregate — the same fold, applied at the next depth.
pub async fn run_all(state: &Arc<ServerState>) -> PulseResult<AggregateResult> {
    let started = Instant::now();
    let (database, search, performance) = tokio::join!(
        run_group(state, ProbeGroup::Database),
        run_group(state, ProbeGroup::Search),
        run_group(state, ProbeGroup::Performance),
    );
    let children = vec![
        AggregateNode::Group(database?),
        AggregateNode::Group(search?),
        AggregateNode::Group(performance?),
    ];
    let elapsed_ms = started.elapsed().as_millis() as u64;
    aggregate("system", children, elapsed_ms)
}

/// Report shape for one group endpoint.
pub async fn group_report(
    state: &Arc<ServerState>,
    group: ProbeGroup,
) -> PulseResult<StatusReport> {
    Ok(run_group(state, group).await?.into())
}

/// Report shape for the full aggregation endpoint.
pub async fn all_report(state: &Arc<ServerState>) -> PulseResult<StatusReport> {
    Ok(run_all(state).await?.into())
}
