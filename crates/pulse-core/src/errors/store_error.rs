/// Store-layer errors for opening the read-only SQLite pool.
///
/// Failures of individual probe queries are [`ProbeError`]s, not these.
///
/// [`ProbeError`]: super::ProbeError
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot open database {path}: {message}")]
    OpenFailed { path: String, message: String },
}
