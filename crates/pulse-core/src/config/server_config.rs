use serde::{Deserialize, Serialize};

use super::defaults;

/// HTTP service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address, e.g. `0.0.0.0:8787`.
    pub bind_addr: String,
    /// Environment tag echoed on the public status endpoint.
    pub environment: String,
    /// Per-probe timeout in seconds; a probe past this is reported as
    /// `error` ("timed out") without touching its siblings.
    pub probe_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: defaults::DEFAULT_BIND_ADDR.to_string(),
            environment: defaults::DEFAULT_ENVIRONMENT.to_string(),
            probe_timeout_secs: defaults::DEFAULT_PROBE_TIMEOUT_SECS,
        }
    }
}
