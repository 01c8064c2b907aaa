use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

use super::StatusLevel;

/// One configured check: identity plus a kind-specific target and thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeSpec {
    pub name: String,
    pub kind: ProbeKind,
}

/// Tagged probe kinds. Each variant carries its own target description and
/// numeric thresholds; nothing is shared through dynamic shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProbeKind {
    /// HTTP endpoint check: accepted status codes, a latency ceiling, and
    /// optional body-substring override rules.
    Http {
        url: String,
        accepted_statuses: Vec<u16>,
        latency_ceiling_ms: u64,
        #[serde(default)]
        body_rules: Vec<BodyRule>,
    },
    /// Count query with an expected floor and optional sanity ceiling.
    RecordCount {
        sql: String,
        min_count: u64,
        #[serde(default)]
        max_count: Option<u64>,
    },
    /// Full-text-search sanity check: minimum match count and a latency
    /// ceiling for the search itself.
    Search {
        term: String,
        min_matches: u64,
        latency_ceiling_ms: u64,
    },
    /// Latency-only query with a two-band budget. Budgets differ per probe
    /// (30 ms point lookups, 200 ms aggregations), so both ceilings are
    /// configured, never hard-coded.
    Latency {
        sql: String,
        healthy_ceiling_ms: u64,
        degraded_ceiling_ms: u64,
    },
}

/// Marks a nominally successful response as degraded or down when its body
/// contains `needle`. Applied after primary classification; can only worsen
/// the level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyRule {
    pub needle: String,
    pub verdict: StatusLevel,
}

impl ProbeSpec {
    pub fn new(name: impl Into<String>, kind: ProbeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Check the threshold invariants. Violations are configuration
    /// faults, reported before any probe runs.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.kind {
            ProbeKind::Http {
                url,
                accepted_statuses,
                body_rules,
                ..
            } => {
                if url.is_empty() {
                    return Err(ConfigError::InvalidProbe {
                        probe: self.name.clone(),
                        reason: "url is empty".into(),
                    });
                }
                if accepted_statuses.is_empty() {
                    return Err(ConfigError::NoAcceptedStatuses {
                        probe: self.name.clone(),
                    });
                }
                for rule in body_rules {
                    if rule.needle.is_empty() {
                        return Err(ConfigError::InvalidProbe {
                            probe: self.name.clone(),
                            reason: "body rule needle is empty".into(),
                        });
                    }
                    if rule.verdict == StatusLevel::Healthy {
                        return Err(ConfigError::InvalidProbe {
                            probe: self.name.clone(),
                            reason: "body rule verdict must be degraded or error".into(),
                        });
                    }
                }
                Ok(())
            }
            ProbeKind::RecordCount {
                sql,
                min_count,
                max_count,
            } => {
                if sql.is_empty() {
                    return Err(ConfigError::InvalidProbe {
                        probe: self.name.clone(),
                        reason: "sql is empty".into(),
                    });
                }
                if let Some(max) = max_count {
                    if max < min_count {
                        return Err(ConfigError::InvalidThreshold {
                            probe: self.name.clone(),
                            reason: format!("max_count {max} is below min_count {min_count}"),
                        });
                    }
                }
                Ok(())
            }
            ProbeKind::Search { term, .. } => {
                if term.is_empty() {
                    return Err(ConfigError::InvalidProbe {
                        probe: self.name.clone(),
                        reason: "search term is empty".into(),
                    });
                }
                Ok(())
            }
            ProbeKind::Latency {
                sql,
                healthy_ceiling_ms,
                degraded_ceiling_ms,
            } => {
                if sql.is_empty() {
                    return Err(ConfigError::InvalidProbe {
                        probe: self.name.clone(),
                        reason: "sql is empty".into(),
                    });
                }
                if degraded_ceiling_ms < healthy_ceiling_ms {
                    return Err(ConfigError::InvalidThreshold {
                        probe: self.name.clone(),
                        reason: format!(
                            "degraded ceiling {degraded_ceiling_ms}ms is below healthy ceiling {healthy_ceiling_ms}ms"
                        ),
                    });
                }
                Ok(())
            }
        }
    }
}
