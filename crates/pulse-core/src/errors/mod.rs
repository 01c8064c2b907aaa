//! Error handling for Pulse.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod guard_error;
pub mod probe_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use guard_error::GuardError;
pub use probe_error::ProbeError;
pub use store_error::StoreError;

/// Umbrella error for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum PulseError {
    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Guard(#[from] GuardError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type PulseResult<T> = Result<T, PulseError>;
