//! # pulse-probes
//!
//! The decision half of Pulse: probe executors for HTTP endpoints and the
//! backing SQLite store, the pure classifier, the fan-out runner, and the
//! worst-level aggregator.

pub mod aggregate;
pub mod classifier;
pub mod groups;
pub mod http_probe;
pub mod runner;
pub mod store;

pub use aggregate::{aggregate, aggregate_probes};
pub use classifier::classify;
pub use http_probe::HttpProbe;
pub use runner::ProbeRunner;
pub use store::ReadPool;
