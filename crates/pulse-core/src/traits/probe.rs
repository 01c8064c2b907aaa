use async_trait::async_trait;

use crate::errors::ProbeError;
use crate::models::{Observation, ProbeSpec};

/// One executable check against an external resource.
///
/// A probe owns its connection/request; it reports what it observed and the
/// runner attaches the timing envelope. A returned `Err` is recovered at the
/// runner boundary as an `error`-level result for this probe alone.
#[async_trait]
pub trait Probe: Send + Sync {
    fn spec(&self) -> &ProbeSpec;

    async fn observe(&self) -> Result<Observation, ProbeError>;
}
