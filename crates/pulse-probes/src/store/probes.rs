//! SQLite probe executors: connectivity, record count, FTS presence,
//! full-text search, and query latency. All read-only; blocking queries run
//! on the blocking thread pool so the fan-out stays responsive.

use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::Connection;

use pulse_core::errors::ProbeError;
use pulse_core::models::{Observation, ProbeKind, ProbeSpec};
use pulse_core::traits::Probe;

use super::ReadPool;

fn sql_fault(e: rusqlite::Error) -> ProbeError {
    ProbeError::QueryFailed {
        message: e.to_string(),
    }
}

async fn on_blocking_pool<T, F>(pool: Arc<ReadPool>, f: F) -> Result<T, ProbeError>
where
    T: Send + 'static,
    F: FnOnce(&Connection) -> Result<T, ProbeError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || pool.with_conn(f))
        .await
        .map_err(|e| ProbeError::Panicked {
            message: e.to_string(),
        })?
}

/// `SELECT 1` sanity check. Anything but a single `1` back is a fault.
pub struct ConnectivityProbe {
    spec: ProbeSpec,
    pool: Arc<ReadPool>,
}

impl ConnectivityProbe {
    pub fn new(spec: ProbeSpec, pool: Arc<ReadPool>) -> Self {
        Self { spec, pool }
    }
}

#[async_trait]
impl Probe for ConnectivityProbe {
    fn spec(&self) -> &ProbeSpec {
        &self.spec
    }

    async fn observe(&self) -> Result<Observation, ProbeError> {
        on_blocking_pool(Arc::clone(&self.pool), |conn| {
            let value: i64 = conn
                .query_row("SELECT 1", [], |row| row.get(0))
                .map_err(sql_fault)?;
            if value != 1 {
                return Err(ProbeError::UnexpectedResponse {
                    message: format!("connectivity query returned {value}"),
                });
            }
            Ok(Observation::QueryTiming)
        })
        .await
    }
}

/// Runs the spec's count SQL and reports the observed count.
pub struct RecordCountProbe {
    spec: ProbeSpec,
    pool: Arc<ReadPool>,
}

impl RecordCountProbe {
    pub fn new(spec: ProbeSpec, pool: Arc<ReadPool>) -> Self {
        Self { spec, pool }
    }
}

#[async_trait]
impl Probe for RecordCountProbe {
    fn spec(&self) -> &ProbeSpec {
        &self.spec
    }

    async fn observe(&self) -> Result<Observation, ProbeError> {
        let ProbeKind::RecordCount { sql, .. } = &self.spec.kind else {
            return Err(ProbeError::UnexpectedResponse {
                message: format!("probe '{}' is not a count probe", self.spec.name),
            });
        };
        let sql = sql.clone();
        on_blocking_pool(Arc::clone(&self.pool), move |conn| {
            let count: i64 = conn
                .query_row(&sql, [], |row| row.get(0))
                .map_err(sql_fault)?;
            Ok(Observation::RecordCount {
                count: count.max(0) as u64,
            })
        })
        .await
    }
}

/// Verifies the FTS virtual table exists before the search probes run.
/// Absence is a fault, not a low count.
pub struct FtsPresenceProbe {
    spec: ProbeSpec,
    fts_table: String,
    pool: Arc<ReadPool>,
}

impl FtsPresenceProbe {
    pub fn new(spec: ProbeSpec, fts_table: impl Into<String>, pool: Arc<ReadPool>) -> Self {
        Self {
            spec,
            fts_table: fts_table.into(),
            pool,
        }
    }
}

#[async_trait]
impl Probe for FtsPresenceProbe {
    fn spec(&self) -> &ProbeSpec {
        &self.spec
    }

    async fn observe(&self) -> Result<Observation, ProbeError> {
        let fts_table = self.fts_table.clone();
        on_blocking_pool(Arc::clone(&self.pool), move |conn| {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [&fts_table],
                    |row| row.get(0),
                )
                .map_err(sql_fault)?;
            if count == 0 {
                return Err(ProbeError::UnexpectedResponse {
                    message: format!("FTS table '{fts_table}' does not exist"),
                });
            }
            Ok(Observation::RecordCount { count: count as u64 })
        })
        .await
    }
}

/// Counts FTS matches for the spec's term via a rowid subquery against the
/// source table.
pub struct SearchProbe {
    spec: ProbeSpec,
    table: String,
    fts_table: String,
    pool: Arc<ReadPool>,
}

impl SearchProbe {
    pub fn new(
        spec: ProbeSpec,
        table: impl Into<String>,
        fts_table: impl Into<String>,
        pool: Arc<ReadPool>,
    ) -> Self {
        Self {
            spec,
            table: table.into(),
            fts_table: fts_table.into(),
            pool,
        }
    }
}

#[async_trait]
impl Probe for SearchProbe {
    fn spec(&self) -> &ProbeSpec {
        &self.spec
    }

    async fn observe(&self) -> Result<Observation, ProbeError> {
        let ProbeKind::Search { term, .. } = &self.spec.kind else {
            return Err(ProbeError::UnexpectedResponse {
                message: format!("probe '{}' is not a search probe", self.spec.name),
            });
        };
        let term = term.clone();
        let sql = format!(
            "SELECT COUNT(*) FROM {table} r WHERE r.rowid IN \
             (SELECT rowid FROM {fts} WHERE {fts} MATCH ?1)",
            table = self.table,
            fts = self.fts_table,
        );
        on_blocking_pool(Arc::clone(&self.pool), move |conn| {
            let count: i64 = conn
                .query_row(&sql, [&term], |row| row.get(0))
                .map_err(sql_fault)?;
            Ok(Observation::SearchMatches {
                count: count.max(0) as u64,
            })
        })
        .await
    }
}

/// Runs the spec's SQL and drains every row; only the elapsed time matters.
pub struct LatencyProbe {
    spec: ProbeSpec,
    pool: Arc<ReadPool>,
}

impl LatencyProbe {
    pub fn new(spec: ProbeSpec, pool: Arc<ReadPool>) -> Self {
        Self { spec, pool }
    }
}

#[async_trait]
impl Probe for LatencyProbe {
    fn spec(&self) -> &ProbeSpec {
        &self.spec
    }

    async fn observe(&self) -> Result<Observation, ProbeError> {
        let ProbeKind::Latency { sql, .. } = &self.spec.kind else {
            return Err(ProbeError::UnexpectedResponse {
                message: format!("probe '{}' is not a latency probe", self.spec.name),
            });
        };
        let sql = sql.clone();
        on_blocking_pool(Arc::clone(&self.pool), move |conn| {
            let mut stmt = conn.prepare(&sql).map_err(sql_fault)?;
            let mut rows = stmt.query([]).map_err(sql_fault)?;
            while rows.next().map_err(sql_fault)?.is_some() {}
            Ok(Observation::QueryTiming)
        })
        .await
    }
}
