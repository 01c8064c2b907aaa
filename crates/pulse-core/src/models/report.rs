use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AggregateNode, AggregateResult, AggregateSummary, StatusLevel};

/// Wire/snapshot shape of one aggregation pass: overall status, flat
/// summary, the full checks tree, and the generation timestamp. The HTTP
/// service returns it as JSON and the batch runner writes it to disk
/// unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub status: StatusLevel,
    pub summary: AggregateSummary,
    pub checks: Vec<AggregateNode>,
    pub elapsed_ms: u64,
    pub timestamp: DateTime<Utc>,
}

impl From<AggregateResult> for StatusReport {
    fn from(aggregate: AggregateResult) -> Self {
        let summary = aggregate.summary();
        Self {
            status: aggregate.status,
            summary,
            checks: aggregate.checks,
            elapsed_ms: aggregate.elapsed_ms,
            timestamp: aggregate.generated_at,
        }
    }
}
