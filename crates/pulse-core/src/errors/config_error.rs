/// Configuration faults. Fatal to the aggregation call that hits them —
/// never silently defaulted.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("probe group '{group}' has no children")]
    EmptyGroup { group: String },

    #[error("invalid threshold for probe '{probe}': {reason}")]
    InvalidThreshold { probe: String, reason: String },

    #[error("probe '{probe}' accepts no status codes")]
    NoAcceptedStatuses { probe: String },

    #[error("invalid probe '{probe}': {reason}")]
    InvalidProbe { probe: String, reason: String },

    #[error("no database configured but store probes were requested")]
    MissingStore,

    #[error("cannot read config file {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("config file {path} is not valid TOML: {reason}")]
    Malformed { path: String, reason: String },
}
