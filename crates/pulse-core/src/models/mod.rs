//! Core data model: status levels, probe specs, measurements, results,
//! and the aggregate tree. Everything here is write-once — built fresh per
//! invocation and never mutated afterwards.

pub mod aggregate;
pub mod measurement;
pub mod probe_result;
pub mod probe_spec;
pub mod report;
pub mod status_level;

pub use aggregate::{AggregateNode, AggregateResult, AggregateSummary, FailureNote};
pub use report::StatusReport;
pub use measurement::{Measurement, Observation};
pub use probe_result::ProbeResult;
pub use probe_spec::{BodyRule, ProbeKind, ProbeSpec};
pub use status_level::StatusLevel;
