/// Faults raised while running a single probe.
///
/// These are always recovered at the runner boundary: the failing probe is
/// reported at the `error` level and the rest of the batch continues.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("request failed: {message}")]
    RequestFailed { message: String },

    #[error("query failed: {message}")]
    QueryFailed { message: String },

    #[error("timed out after {seconds}s")]
    TimedOut { seconds: u64 },

    #[error("unexpected response: {message}")]
    UnexpectedResponse { message: String },

    #[error("probe panicked: {message}")]
    Panicked { message: String },
}
