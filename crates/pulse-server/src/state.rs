//! Shared service state: config, access policy, read pool, runner.

use std::sync::Arc;

use pulse_core::config::PulseConfig;
use pulse_core::errors::{ConfigError, PulseResult};
use pulse_guard::AccessPolicy;
use pulse_probes::{ProbeRunner, ReadPool};

pub struct ServerState {
    pub config: PulseConfig,
    pub policy: AccessPolicy,
    pub pool: Arc<ReadPool>,
    pub runner: ProbeRunner,
}

impl ServerState {
    /// Validate config, build the access policy, and open the read pool.
    /// The service cannot start without a database — the store groups are
    /// its whole surface.
    pub fn from_config(config: PulseConfig) -> PulseResult<Arc<Self>> {
        config.validate()?;
        let policy = AccessPolicy::from_config(&config.guard)?;
        let db_path = config
            .store
            .db_path
            .as_deref()
            .ok_or(ConfigError::MissingStore)?;
        let pool = Arc::new(ReadPool::open(db_path, config.store.read_pool_size)?);
        let runner = ProbeRunner::from_secs(config.server.probe_timeout_secs);
        Ok(Arc::new(Self {
            config,
            policy,
            pool,
            runner,
        }))
    }
}
