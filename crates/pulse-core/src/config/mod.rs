//! Configuration: serde structs with defaults from a single constants
//! module, loaded from TOML by the binaries and passed down explicitly.
//! Nothing in the core reads the environment.

pub mod defaults;
pub mod guard_config;
pub mod probe_config;
pub mod server_config;
pub mod store_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, PulseResult};

pub use guard_config::GuardConfig;
pub use probe_config::{
    EndpointConfig, LatencyProbeConfig, PerformanceConfig, SearchConfig, SearchTermConfig,
};
pub use server_config::ServerConfig;
pub use store_config::StoreConfig;

/// Top-level configuration for the service and the batch runner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseConfig {
    pub server: ServerConfig,
    pub guard: GuardConfig,
    pub store: StoreConfig,
    /// Monitored HTTP endpoints (batch runner).
    pub endpoints: Vec<EndpointConfig>,
    pub search: SearchConfig,
    pub performance: PerformanceConfig,
}

impl PulseConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> PulseResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: Self = toml::from_str(&raw).map_err(|e| ConfigError::Malformed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every probe spec this config would produce.
    pub fn validate(&self) -> PulseResult<()> {
        for endpoint in &self.endpoints {
            endpoint.to_spec().validate()?;
        }
        for spec in self.search.term_specs() {
            spec.validate()?;
        }
        for probe in &self.performance.probes {
            probe.to_spec().validate()?;
        }
        Ok(())
    }
}
