//! # pulse-core
//!
//! Foundation crate for the Pulse status system.
//! Defines all models, traits, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::PulseConfig;
pub use errors::{PulseError, PulseResult};
pub use models::{
    AggregateNode, AggregateResult, Measurement, Observation, ProbeKind, ProbeResult, ProbeSpec,
    StatusLevel,
};
