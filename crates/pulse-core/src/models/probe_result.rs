use serde::{Deserialize, Serialize};

use super::{Measurement, StatusLevel};

/// A classified measurement: the probe's name, the level it earned, and a
/// human-readable note naming the threshold that was crossed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    pub name: String,
    pub status: StatusLevel,
    /// Why the level was assigned; `None` when nothing was crossed.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub detail: Option<String>,
    #[serde(flatten)]
    pub measurement: Measurement,
}

impl ProbeResult {
    pub fn new(
        name: impl Into<String>,
        status: StatusLevel,
        detail: Option<String>,
        measurement: Measurement,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            detail,
            measurement,
        }
    }
}
