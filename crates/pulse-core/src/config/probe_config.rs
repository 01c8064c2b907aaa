use serde::{Deserialize, Serialize};

use crate::models::{BodyRule, ProbeKind, ProbeSpec, StatusLevel};

use super::defaults;

/// One monitored HTTP endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub name: String,
    pub url: String,
    /// Status codes counted as up. Anything else is `error`.
    #[serde(default = "default_accepted_statuses")]
    pub accepted_statuses: Vec<u16>,
    #[serde(default = "default_endpoint_ceiling")]
    pub latency_ceiling_ms: u64,
    /// Body substring that marks an otherwise-successful response degraded.
    #[serde(default)]
    pub body_degraded: Option<String>,
    /// Body substring that marks an otherwise-successful response down.
    #[serde(default)]
    pub body_down: Option<String>,
}

fn default_accepted_statuses() -> Vec<u16> {
    vec![defaults::DEFAULT_ACCEPTED_STATUS]
}

fn default_endpoint_ceiling() -> u64 {
    defaults::DEFAULT_ENDPOINT_LATENCY_CEILING_MS
}

impl EndpointConfig {
    pub fn to_spec(&self) -> ProbeSpec {
        let mut body_rules = Vec::new();
        if let Some(needle) = &self.body_down {
            body_rules.push(BodyRule {
                needle: needle.clone(),
                verdict: StatusLevel::Error,
            });
        }
        if let Some(needle) = &self.body_degraded {
            body_rules.push(BodyRule {
                needle: needle.clone(),
                verdict: StatusLevel::Degraded,
            });
        }
        ProbeSpec::new(
            self.name.clone(),
            ProbeKind::Http {
                url: self.url.clone(),
                accepted_statuses: self.accepted_statuses.clone(),
                latency_ceiling_ms: self.latency_ceiling_ms,
                body_rules,
            },
        )
    }
}

/// Full-text-search probe group configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Terms to probe, each with its own expected minimum match count.
    pub terms: Vec<SearchTermConfig>,
    /// Combined relevance query run after the per-term probes; at least one
    /// match is expected.
    pub relevance_query: Option<String>,
    pub latency_ceiling_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchTermConfig {
    pub term: String,
    #[serde(default = "default_min_matches")]
    pub min_matches: u64,
}

fn default_min_matches() -> u64 {
    defaults::DEFAULT_SEARCH_MIN_MATCHES
}

impl SearchConfig {
    pub fn term_specs(&self) -> Vec<ProbeSpec> {
        let ceiling = self
            .latency_ceiling_ms
            .unwrap_or(defaults::DEFAULT_SEARCH_LATENCY_CEILING_MS);
        self.terms
            .iter()
            .map(|t| {
                ProbeSpec::new(
                    t.term.clone(),
                    ProbeKind::Search {
                        term: t.term.clone(),
                        min_matches: t.min_matches,
                        latency_ceiling_ms: ceiling,
                    },
                )
            })
            .collect()
    }
}

/// Query-latency probe group configuration. When no probes are configured,
/// a built-in set derived from the store's table is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceConfig {
    pub probes: Vec<LatencyProbeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LatencyProbeConfig {
    pub name: String,
    pub sql: String,
    pub healthy_ceiling_ms: u64,
    /// Upper bound of the degraded band; defaults to twice the healthy
    /// ceiling when omitted.
    #[serde(default)]
    pub degraded_ceiling_ms: Option<u64>,
}

impl LatencyProbeConfig {
    pub fn to_spec(&self) -> ProbeSpec {
        ProbeSpec::new(
            self.name.clone(),
            ProbeKind::Latency {
                sql: self.sql.clone(),
                healthy_ceiling_ms: self.healthy_ceiling_ms,
                degraded_ceiling_ms: self.degraded_ceiling_ms.unwrap_or(
                    self.healthy_ceiling_ms * defaults::DEFAULT_DEGRADED_BAND_FACTOR,
                ),
            },
        )
    }
}
