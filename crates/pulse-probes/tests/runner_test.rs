//! Runner tests: fault isolation, timeout substitution, spec-order output
//! under concurrency.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use pulse_core::errors::ProbeError;
use pulse_core::models::{Observation, ProbeKind, ProbeSpec, StatusLevel};
use pulse_core::traits::Probe;
use pulse_probes::ProbeRunner;

enum StubOutcome {
    Observe(Observation),
    Fail(String),
    Hang,
}

struct StubProbe {
    spec: ProbeSpec,
    delay: Duration,
    outcome: StubOutcome,
}

impl StubProbe {
    fn timing(name: &str, delay_ms: u64, outcome: StubOutcome) -> Arc<dyn Probe> {
        Arc::new(Self {
            spec: ProbeSpec::new(
                name,
                ProbeKind::Latency {
                    sql: "SELECT 1".to_string(),
                    healthy_ceiling_ms: 5_000,
                    degraded_ceiling_ms: 10_000,
                },
            ),
            delay: Duration::from_millis(delay_ms),
            outcome,
        })
    }
}

#[async_trait]
impl Probe for StubProbe {
    fn spec(&self) -> &ProbeSpec {
        &self.spec
    }

    async fn observe(&self) -> Result<Observation, ProbeError> {
        tokio::time::sleep(self.delay).await;
        match &self.outcome {
            StubOutcome::Observe(observation) => Ok(observation.clone()),
            StubOutcome::Fail(message) => Err(ProbeError::QueryFailed {
                message: message.clone(),
            }),
            StubOutcome::Hang => {
                tokio::time::sleep(Duration::from_secs(3_600)).await;
                Ok(Observation::QueryTiming)
            }
        }
    }
}

#[tokio::test]
async fn results_keep_spec_order_under_concurrency() {
    let runner = ProbeRunner::from_secs(30);
    let probes = vec![
        StubProbe::timing("slow", 80, StubOutcome::Observe(Observation::QueryTiming)),
        StubProbe::timing("fast", 1, StubOutcome::Observe(Observation::QueryTiming)),
        StubProbe::timing("medium", 40, StubOutcome::Observe(Observation::QueryTiming)),
    ];
    let results = runner.run(probes).await;
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["slow", "fast", "medium"]);
}

#[tokio::test]
async fn one_failing_probe_never_aborts_the_batch() {
    let runner = ProbeRunner::from_secs(30);
    let probes = vec![
        StubProbe::timing("ok", 1, StubOutcome::Observe(Observation::QueryTiming)),
        StubProbe::timing("broken", 1, StubOutcome::Fail("no such table: records".into())),
        StubProbe::timing("also_ok", 1, StubOutcome::Observe(Observation::QueryTiming)),
    ];
    let results = runner.run(probes).await;
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].status, StatusLevel::Healthy);
    assert_eq!(results[1].status, StatusLevel::Error);
    assert_eq!(results[2].status, StatusLevel::Healthy);

    // The failure message survives verbatim for diagnostics.
    assert!(results[1]
        .detail
        .as_deref()
        .unwrap()
        .contains("no such table: records"));
}

#[tokio::test]
async fn timed_out_probe_is_an_error_without_touching_siblings() {
    let runner = ProbeRunner::new(Duration::from_millis(100));
    let probes = vec![
        StubProbe::timing("stuck", 0, StubOutcome::Hang),
        StubProbe::timing("ok", 1, StubOutcome::Observe(Observation::QueryTiming)),
    ];
    let results = runner.run(probes).await;
    assert_eq!(results[0].status, StatusLevel::Error);
    assert!(results[0].detail.as_deref().unwrap().contains("timed out"));
    assert_eq!(results[1].status, StatusLevel::Healthy);
}

#[tokio::test]
async fn measurements_are_timestamped_and_timed() {
    let runner = ProbeRunner::from_secs(30);
    let probes = vec![StubProbe::timing(
        "timed",
        30,
        StubOutcome::Observe(Observation::QueryTiming),
    )];
    let results = runner.run(probes).await;
    assert!(results[0].measurement.elapsed_ms >= 30);
}
