//! Probe fan-out: one task per probe, per-probe timeout, results collected
//! in spec order regardless of completion order.

use std::sync::Arc;
use std::time::{Duration, Instant};

use pulse_core::errors::ProbeError;
use pulse_core::models::{Measurement, Observation, ProbeResult, StatusLevel};
use pulse_core::traits::Probe;
use tracing::debug;

use crate::classifier::classify;

/// Executes batches of probes concurrently. One probe's fault never aborts
/// the batch; a timed-out probe is reported as `error` ("timed out") while
/// its siblings keep running.
#[derive(Debug, Clone)]
pub struct ProbeRunner {
    timeout: Duration,
}

impl ProbeRunner {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn from_secs(timeout_secs: u64) -> Self {
        Self::new(Duration::from_secs(timeout_secs))
    }

    /// Run every probe and return one classified result per probe, in the
    /// caller-supplied order. Results are joined by spawn index, never by
    /// arrival order.
    pub async fn run(&self, probes: Vec<Arc<dyn Probe>>) -> Vec<ProbeResult> {
        let handles: Vec<_> = probes
            .into_iter()
            .map(|probe| {
                let name = probe.spec().name.clone();
                let handle = tokio::spawn(run_one(probe, self.timeout));
                (name, handle)
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for (name, handle) in handles {
            match handle.await {
                Ok(result) => results.push(result),
                Err(e) => {
                    let fault = ProbeError::Panicked {
                        message: e.to_string(),
                    };
                    results.push(ProbeResult::new(
                        name,
                        StatusLevel::Error,
                        Some(fault.to_string()),
                        Measurement::fault(fault.to_string(), 0),
                    ));
                }
            }
        }
        results
    }
}

async fn run_one(probe: Arc<dyn Probe>, timeout: Duration) -> ProbeResult {
    let started = Instant::now();
    let observation = match tokio::time::timeout(timeout, probe.observe()).await {
        Ok(Ok(observation)) => observation,
        Ok(Err(fault)) => Observation::Fault {
            message: fault.to_string(),
        },
        Err(_) => Observation::Fault {
            message: ProbeError::TimedOut {
                seconds: timeout.as_secs(),
            }
            .to_string(),
        },
    };
    let elapsed_ms = started.elapsed().as_millis() as u64;
    let measurement = Measurement::new(observation, elapsed_ms);
    let (status, detail) = classify(&measurement, probe.spec());
    debug!(probe = %probe.spec().name, status = %status, elapsed_ms, "probe finished");
    ProbeResult::new(probe.spec().name.clone(), status, detail, measurement)
}
