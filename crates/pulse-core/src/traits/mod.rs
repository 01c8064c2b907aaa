//! Trait seams between the core and the probe executors.

pub mod probe;

pub use probe::Probe;
