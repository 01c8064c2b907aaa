//! Probe-group builders. The service and the batch runner both build their
//! probe sets here, so the two surfaces always agree on what gets checked.

use std::sync::Arc;

use pulse_core::config::defaults;
use pulse_core::config::{EndpointConfig, LatencyProbeConfig, PerformanceConfig, SearchConfig, StoreConfig};
use pulse_core::errors::PulseResult;
use pulse_core::models::{ProbeKind, ProbeSpec};
use pulse_core::traits::Probe;

use crate::http_probe::HttpProbe;
use crate::store::{
    ConnectivityProbe, FtsPresenceProbe, LatencyProbe, RecordCountProbe, ReadPool, SearchProbe,
};

/// Ceiling for the `SELECT 1` connectivity check.
const CONNECTIVITY_CEILING_MS: u64 = 1_000;

/// Database group: connectivity, record-count band, sample-row integrity.
pub fn database_probes(
    pool: &Arc<ReadPool>,
    store: &StoreConfig,
) -> PulseResult<Vec<Arc<dyn Probe>>> {
    let connectivity = ProbeSpec::new(
        "connection",
        ProbeKind::Latency {
            sql: "SELECT 1".to_string(),
            healthy_ceiling_ms: CONNECTIVITY_CEILING_MS,
            degraded_ceiling_ms: CONNECTIVITY_CEILING_MS * defaults::DEFAULT_DEGRADED_BAND_FACTOR,
        },
    );
    let record_count = ProbeSpec::new(
        "record_count",
        ProbeKind::RecordCount {
            sql: format!("SELECT COUNT(*) FROM {}", store.table),
            min_count: store.min_records,
            max_count: Some(store.max_records),
        },
    );
    let integrity = ProbeSpec::new(
        "data_integrity",
        ProbeKind::RecordCount {
            sql: integrity_sql(store),
            min_count: 1,
            max_count: None,
        },
    );

    let mut probes: Vec<Arc<dyn Probe>> = Vec::new();
    for spec in [&connectivity, &record_count, &integrity] {
        spec.validate()?;
    }
    probes.push(Arc::new(ConnectivityProbe::new(
        connectivity,
        Arc::clone(pool),
    )));
    probes.push(Arc::new(RecordCountProbe::new(
        record_count,
        Arc::clone(pool),
    )));
    probes.push(Arc::new(RecordCountProbe::new(integrity, Arc::clone(pool))));
    Ok(probes)
}

/// At least one sample row with every required column populated.
fn integrity_sql(store: &StoreConfig) -> String {
    let mut sql = format!("SELECT COUNT(*) FROM (SELECT 1 FROM {}", store.table);
    if !store.required_columns.is_empty() {
        let clauses: Vec<String> = store
            .required_columns
            .iter()
            .map(|col| format!("{col} IS NOT NULL"))
            .collect();
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(" LIMIT 1)");
    sql
}

/// Full-text-search group: FTS table presence, one probe per configured
/// term, and an optional combined relevance query.
pub fn search_probes(
    pool: &Arc<ReadPool>,
    store: &StoreConfig,
    search: &SearchConfig,
) -> PulseResult<Vec<Arc<dyn Probe>>> {
    let mut probes: Vec<Arc<dyn Probe>> = Vec::new();

    let presence = ProbeSpec::new(
        "fts_table",
        ProbeKind::RecordCount {
            sql: format!(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = '{}'",
                store.fts_table
            ),
            min_count: 1,
            max_count: None,
        },
    );
    presence.validate()?;
    probes.push(Arc::new(FtsPresenceProbe::new(
        presence,
        store.fts_table.clone(),
        Arc::clone(pool),
    )));

    for spec in search.term_specs() {
        spec.validate()?;
        probes.push(Arc::new(SearchProbe::new(
            spec,
            store.table.clone(),
            store.fts_table.clone(),
            Arc::clone(pool),
        )));
    }

    if let Some(query) = &search.relevance_query {
        let spec = ProbeSpec::new(
            "relevance",
            ProbeKind::Search {
                term: query.clone(),
                min_matches: defaults::DEFAULT_SEARCH_MIN_MATCHES,
                latency_ceiling_ms: search
                    .latency_ceiling_ms
                    .unwrap_or(defaults::DEFAULT_SEARCH_LATENCY_CEILING_MS),
            },
        );
        spec.validate()?;
        probes.push(Arc::new(SearchProbe::new(
            spec,
            store.table.clone(),
            store.fts_table.clone(),
            Arc::clone(pool),
        )));
    }

    Ok(probes)
}

/// Query-latency group. Configured probes win; otherwise a built-in set
/// derived from the store's tables is used.
pub fn performance_probes(
    pool: &Arc<ReadPool>,
    store: &StoreConfig,
    performance: &PerformanceConfig,
) -> PulseResult<Vec<Arc<dyn Probe>>> {
    let configs = if performance.probes.is_empty() {
        default_performance_probes(store)
    } else {
        performance.probes.clone()
    };

    let mut probes: Vec<Arc<dyn Probe>> = Vec::new();
    for config in &configs {
        let spec = config.to_spec();
        spec.validate()?;
        probes.push(Arc::new(LatencyProbe::new(spec, Arc::clone(pool))));
    }
    Ok(probes)
}

fn default_performance_probes(store: &StoreConfig) -> Vec<LatencyProbeConfig> {
    let table = &store.table;
    let fts = &store.fts_table;
    vec![
        LatencyProbeConfig {
            name: "simple_count".to_string(),
            sql: format!("SELECT COUNT(*) FROM {table}"),
            healthy_ceiling_ms: defaults::DEFAULT_SIMPLE_COUNT_CEILING_MS,
            degraded_ceiling_ms: None,
        },
        LatencyProbeConfig {
            name: "point_lookup".to_string(),
            sql: format!("SELECT * FROM {table} WHERE rowid = 1"),
            healthy_ceiling_ms: defaults::DEFAULT_POINT_LOOKUP_CEILING_MS,
            degraded_ceiling_ms: None,
        },
        LatencyProbeConfig {
            name: "range_scan".to_string(),
            sql: format!("SELECT * FROM {table} WHERE rowid BETWEEN 100 AND 200"),
            healthy_ceiling_ms: defaults::DEFAULT_RANGE_SCAN_CEILING_MS,
            degraded_ceiling_ms: None,
        },
        LatencyProbeConfig {
            name: "fts_search".to_string(),
            sql: format!(
                "SELECT r.rowid FROM {table} r WHERE r.rowid IN \
                 (SELECT rowid FROM {fts} WHERE {fts} MATCH 'probe') LIMIT 10"
            ),
            healthy_ceiling_ms: defaults::DEFAULT_FTS_SEARCH_CEILING_MS,
            degraded_ceiling_ms: None,
        },
        LatencyProbeConfig {
            name: "aggregation".to_string(),
            sql: format!("SELECT MIN(rowid), MAX(rowid), COUNT(*) FROM {table}"),
            healthy_ceiling_ms: defaults::DEFAULT_AGGREGATION_CEILING_MS,
            degraded_ceiling_ms: None,
        },
    ]
}

/// Monitored-endpoint group for the batch runner; one HTTP probe per entry,
/// all sharing one client.
pub fn endpoint_probes(
    endpoints: &[EndpointConfig],
    client: &reqwest::Client,
) -> PulseResult<Vec<Arc<dyn Probe>>> {
    let mut probes: Vec<Arc<dyn Probe>> = Vec::new();
    for endpoint in endpoints {
        let spec = endpoint.to_spec();
        spec.validate()?;
        probes.push(Arc::new(HttpProbe::new(spec, client.clone())));
    }
    Ok(probes)
}
