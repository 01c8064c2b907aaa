use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ProbeResult, StatusLevel};

/// One node in the aggregate tree: a single classified probe, or a nested
/// group fold. Groups nest to arbitrary depth; the same fold applies at
/// every level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AggregateNode {
    Group(AggregateResult),
    Probe(ProbeResult),
}

impl AggregateNode {
    pub fn name(&self) -> &str {
        match self {
            AggregateNode::Probe(p) => &p.name,
            AggregateNode::Group(g) => &g.name,
        }
    }

    pub fn level(&self) -> StatusLevel {
        match self {
            AggregateNode::Probe(p) => p.status,
            AggregateNode::Group(g) => g.status,
        }
    }
}

/// A fold of one or more child results into a single worst-case level.
///
/// Invariant: `status` always equals the worst level among direct
/// `checks` — never better than any child, never invented independently.
/// Children keep their caller-supplied order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateResult {
    pub name: String,
    pub status: StatusLevel,
    pub checks: Vec<AggregateNode>,
    pub elapsed_ms: u64,
    pub generated_at: DateTime<Utc>,
}

/// Flat view over an aggregate tree: per-level leaf counts plus every
/// failing child — all of them, never just the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub healthy: usize,
    pub degraded: usize,
    pub error: usize,
    pub failures: Vec<FailureNote>,
}

/// One contributing failure, addressed by its dotted path in the tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureNote {
    pub path: String,
    pub status: StatusLevel,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub detail: Option<String>,
}

impl AggregateResult {
    /// Look up a direct child by name.
    pub fn child(&self, name: &str) -> Option<&AggregateNode> {
        self.checks.iter().find(|c| c.name() == name)
    }

    /// Build the flat summary: walk every leaf, count levels, and collect
    /// each non-healthy leaf with its dotted path and detail.
    pub fn summary(&self) -> AggregateSummary {
        let mut summary = AggregateSummary {
            healthy: 0,
            degraded: 0,
            error: 0,
            failures: Vec::new(),
        };
        for child in &self.checks {
            Self::walk(child, "", &mut summary);
        }
        summary
    }

    fn walk(node: &AggregateNode, prefix: &str, summary: &mut AggregateSummary) {
        let path = if prefix.is_empty() {
            node.name().to_string()
        } else {
            format!("{prefix}.{}", node.name())
        };
        match node {
            AggregateNode::Probe(p) => {
                match p.status {
                    StatusLevel::Healthy => summary.healthy += 1,
                    StatusLevel::Degraded => summary.degraded += 1,
                    StatusLevel::Error => summary.error += 1,
                }
                if p.status != StatusLevel::Healthy {
                    summary.failures.push(FailureNote {
                        path,
                        status: p.status,
                        detail: p.detail.clone(),
                    });
                }
            }
            AggregateNode::Group(g) => {
                for child in &g.checks {
                    Self::walk(child, &path, summary);
                }
            }
        }
    }
}
