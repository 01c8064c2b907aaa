use serde::{Deserialize, Serialize};

/// Access guard configuration. Passed into the guard explicitly — the guard
/// itself never reads the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Shared secret; requests presenting it byte-equal are authorized.
    pub api_key: Option<String>,
    /// Allowlist entries: exact addresses or CIDR blocks
    /// (e.g. `203.0.113.7`, `10.1.0.0/16`).
    pub allowed_ips: Vec<String>,
}

impl GuardConfig {
    /// An open system: no key, no allowlist.
    pub fn open() -> Self {
        Self::default()
    }
}
