use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of running one probe once. Immutable; timestamped at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub elapsed_ms: u64,
    pub taken_at: DateTime<Utc>,
    #[serde(flatten)]
    pub observation: Observation,
}

/// What the probe observed, tagged per probe kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "observed", rename_all = "snake_case")]
pub enum Observation {
    HttpResponse {
        status: u16,
        #[serde(skip_serializing, default)]
        body_excerpt: String,
    },
    RecordCount {
        count: u64,
    },
    SearchMatches {
        count: u64,
    },
    /// Latency-only probes: the elapsed time is the whole observation.
    QueryTiming,
    /// The probe failed to execute. The message is preserved verbatim.
    Fault {
        message: String,
    },
}

impl Measurement {
    pub fn new(observation: Observation, elapsed_ms: u64) -> Self {
        Self {
            elapsed_ms,
            taken_at: Utc::now(),
            observation,
        }
    }

    pub fn fault(message: impl Into<String>, elapsed_ms: u64) -> Self {
        Self::new(
            Observation::Fault {
                message: message.into(),
            },
            elapsed_ms,
        )
    }

    pub fn is_fault(&self) -> bool {
        matches!(self.observation, Observation::Fault { .. })
    }
}
