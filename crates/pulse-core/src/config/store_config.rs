use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Backing data store configuration for the database, search, and
/// performance probe groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the SQLite database. `None` disables the store probe groups.
    pub db_path: Option<PathBuf>,
    /// Primary table the record-count and performance probes run against.
    pub table: String,
    /// FTS5 virtual table the search probes run against.
    pub fts_table: String,
    /// Expected record-count band.
    pub min_records: u64,
    pub max_records: u64,
    /// Columns that must be non-null on a sample row for the integrity probe.
    pub required_columns: Vec<String>,
    pub read_pool_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            table: defaults::DEFAULT_RECORDS_TABLE.to_string(),
            fts_table: defaults::DEFAULT_FTS_TABLE.to_string(),
            min_records: defaults::DEFAULT_MIN_RECORDS,
            max_records: defaults::DEFAULT_MAX_RECORDS,
            required_columns: vec!["name".to_string(), "external_id".to_string()],
            read_pool_size: defaults::DEFAULT_READ_POOL_SIZE,
        }
    }
}
