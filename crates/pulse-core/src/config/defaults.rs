// Single source of truth for all default values.

// --- Server ---
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8787";
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 30;

// --- Store ---
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_RECORDS_TABLE: &str = "records";
pub const DEFAULT_FTS_TABLE: &str = "records_fts";
pub const DEFAULT_MIN_RECORDS: u64 = 85_000;
pub const DEFAULT_MAX_RECORDS: u64 = 105_000;

// --- Endpoint probes ---
pub const DEFAULT_ACCEPTED_STATUS: u16 = 200;
pub const DEFAULT_ENDPOINT_LATENCY_CEILING_MS: u64 = 1_000;

// --- Search probes ---
pub const DEFAULT_SEARCH_LATENCY_CEILING_MS: u64 = 500;
pub const DEFAULT_SEARCH_MIN_MATCHES: u64 = 1;

// --- Performance probes ---
pub const DEFAULT_SIMPLE_COUNT_CEILING_MS: u64 = 50;
pub const DEFAULT_POINT_LOOKUP_CEILING_MS: u64 = 30;
pub const DEFAULT_RANGE_SCAN_CEILING_MS: u64 = 100;
pub const DEFAULT_FTS_SEARCH_CEILING_MS: u64 = 150;
pub const DEFAULT_AGGREGATION_CEILING_MS: u64 = 200;

// --- Classifier ---
/// Degraded latency band upper bound as a multiple of the healthy ceiling,
/// used when a probe does not configure its own degraded ceiling.
pub const DEFAULT_DEGRADED_BAND_FACTOR: u64 = 2;

/// Longest body excerpt an HTTP probe keeps for rule matching.
pub const BODY_EXCERPT_MAX_BYTES: usize = 4_096;
