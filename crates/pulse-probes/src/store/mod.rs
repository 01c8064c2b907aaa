//! Read-only access to the backing SQLite store, shared across the probes
//! of one batch. Probes never mutate store state.

pub mod probes;

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use rusqlite::Connection;

use pulse_core::errors::{ProbeError, StoreError};

pub use probes::{ConnectivityProbe, FtsPresenceProbe, LatencyProbe, RecordCountProbe, SearchProbe};

/// Maximum number of read connections.
const MAX_POOL_SIZE: usize = 8;

/// A pool of read-only SQLite connections handed out round-robin.
pub struct ReadPool {
    connections: Vec<Mutex<Connection>>,
    next: AtomicUsize,
}

impl ReadPool {
    /// Open a pool of read-only connections to the given database path.
    pub fn open(path: &Path, pool_size: usize) -> Result<Self, StoreError> {
        let size = pool_size.clamp(1, MAX_POOL_SIZE);
        let mut connections = Vec::with_capacity(size);
        for _ in 0..size {
            let conn = Connection::open_with_flags(
                path,
                rusqlite::OpenFlags::SQLITE_OPEN_READ_ONLY
                    | rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .map_err(|e| StoreError::OpenFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            connections.push(Mutex::new(conn));
        }
        Ok(Self {
            connections,
            next: AtomicUsize::new(0),
        })
    }

    /// Execute a closure with a read connection from the pool (round-robin).
    /// Pool faults inside a probe query are probe faults, recovered like any
    /// other.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, ProbeError>
    where
        F: FnOnce(&Connection) -> Result<T, ProbeError>,
    {
        let idx = self.next.fetch_add(1, Ordering::Relaxed) % self.connections.len();
        let guard = self.connections[idx]
            .lock()
            .map_err(|e| ProbeError::QueryFailed {
                message: format!("read pool lock poisoned: {e}"),
            })?;
        f(&guard)
    }

    /// Number of connections in the pool.
    pub fn size(&self) -> usize {
        self.connections.len()
    }
}
