/// Access guard errors.
///
/// `Denied` is a rejection surfaced to the caller, never a probe failure.
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error("invalid allowlist entry '{entry}': {reason}")]
    InvalidAllowlist { entry: String, reason: String },

    #[error("authentication required")]
    Denied,
}
