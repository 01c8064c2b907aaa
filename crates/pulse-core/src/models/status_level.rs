use serde::{Deserialize, Serialize};

/// Status assigned to one probe or one aggregate.
///
/// The declaration order is the precedence order: `Healthy < Degraded <
/// Error`, so the worst observed level is simply the `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLevel {
    Healthy,
    Degraded,
    Error,
}

impl StatusLevel {
    /// HTTP status code a service response carries for this level.
    pub fn http_status(self) -> u16 {
        match self {
            StatusLevel::Healthy => 200,
            StatusLevel::Degraded => 206,
            StatusLevel::Error => 503,
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, StatusLevel::Error)
    }

    /// Wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            StatusLevel::Healthy => "healthy",
            StatusLevel::Degraded => "degraded",
            StatusLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
