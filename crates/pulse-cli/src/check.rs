//! The `check` command: fan out every configured probe group, fold into one
//! system-level report, print it, optionally snapshot it.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use tracing::info;

use pulse_core::config::PulseConfig;
use pulse_core::models::{AggregateNode, StatusReport};
use pulse_probes::{aggregate, aggregate_probes, groups, ProbeRunner};
use pulse_server::service::run_all;
use pulse_server::ServerState;

use crate::report;

pub async fn run(config: PulseConfig, snapshot: Option<&Path>) -> anyhow::Result<ExitCode> {
    let started = Instant::now();
    let mut children: Vec<AggregateNode> = Vec::new();

    if !config.endpoints.is_empty() {
        let runner = ProbeRunner::from_secs(config.server.probe_timeout_secs);
        let client = reqwest::Client::new();
        let probes = groups::endpoint_probes(&config.endpoints, &client)?;
        let group_started = Instant::now();
        let results = runner.run(probes).await;
        let elapsed_ms = group_started.elapsed().as_millis() as u64;
        children.push(AggregateNode::Group(aggregate_probes(
            "endpoints", results, elapsed_ms,
        )?));
    }

    if config.store.db_path.is_some() {
        let state = ServerState::from_config(config.clone())?;
        let store_pass = run_all(&state).await?;
        children.extend(store_pass.checks);
    }

    let elapsed_ms = started.elapsed().as_millis() as u64;
    let system = aggregate("system", children, elapsed_ms)?;
    let report: StatusReport = system.into();

    report::print(&report);

    if let Some(path) = snapshot {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, &report)?;
        info!(path = %path.display(), "snapshot written");
    }

    Ok(if report.status.is_error() {
        ExitCode::from(2)
    } else {
        ExitCode::SUCCESS
    })
}
