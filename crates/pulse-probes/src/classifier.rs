//! Pure classification: measurement + spec thresholds → status level.
//! Same measurement and spec always produce the same level.

use pulse_core::models::{Measurement, Observation, ProbeKind, ProbeSpec, StatusLevel};

/// Map a raw measurement to a status level plus a note naming the threshold
/// that was crossed. `None` detail means nothing was crossed.
pub fn classify(measurement: &Measurement, spec: &ProbeSpec) -> (StatusLevel, Option<String>) {
    // A fault while obtaining the measurement is an error regardless of any
    // other rule; the failure message is kept verbatim.
    if let Observation::Fault { message } = &measurement.observation {
        return (StatusLevel::Error, Some(message.clone()));
    }

    match (&spec.kind, &measurement.observation) {
        (
            ProbeKind::Http {
                accepted_statuses,
                latency_ceiling_ms,
                body_rules,
                ..
            },
            Observation::HttpResponse {
                status,
                body_excerpt,
            },
        ) => {
            let (mut level, mut detail) = if !accepted_statuses.contains(status) {
                (
                    StatusLevel::Error,
                    Some(format!("status {status} not in accepted set")),
                )
            } else if measurement.elapsed_ms > *latency_ceiling_ms {
                (
                    StatusLevel::Degraded,
                    Some(format!(
                        "latency {}ms exceeds {}ms ceiling",
                        measurement.elapsed_ms, latency_ceiling_ms
                    )),
                )
            } else {
                (StatusLevel::Healthy, None)
            };
            // Substring overrides run after primary classification and can
            // only worsen the level.
            for rule in body_rules {
                if rule.verdict > level && body_excerpt.contains(&rule.needle) {
                    level = rule.verdict;
                    detail = Some(format!("body contains '{}'", rule.needle));
                }
            }
            (level, detail)
        }

        (
            ProbeKind::RecordCount {
                min_count,
                max_count,
                ..
            },
            Observation::RecordCount { count },
        ) => {
            let (count, min) = (*count, *min_count);
            match *max_count {
                _ if count < min => (
                    StatusLevel::Degraded,
                    Some(format!("count {count} below expected floor {min}")),
                ),
                Some(max) if count > max => (
                    StatusLevel::Degraded,
                    Some(format!("count {count} above expected ceiling {max}")),
                ),
                _ => (StatusLevel::Healthy, None),
            }
        }

        (
            ProbeKind::Search {
                min_matches,
                latency_ceiling_ms,
                ..
            },
            Observation::SearchMatches { count },
        ) => {
            if count < min_matches {
                (
                    StatusLevel::Degraded,
                    Some(format!("{count} matches, expected at least {min_matches}")),
                )
            } else if measurement.elapsed_ms > *latency_ceiling_ms {
                (
                    StatusLevel::Degraded,
                    Some(format!(
                        "search took {}ms, ceiling {}ms",
                        measurement.elapsed_ms, latency_ceiling_ms
                    )),
                )
            } else {
                (StatusLevel::Healthy, None)
            }
        }

        (
            ProbeKind::Latency {
                healthy_ceiling_ms,
                degraded_ceiling_ms,
                ..
            },
            Observation::QueryTiming,
        ) => {
            let elapsed = measurement.elapsed_ms;
            if elapsed <= *healthy_ceiling_ms {
                (StatusLevel::Healthy, None)
            } else if elapsed <= *degraded_ceiling_ms {
                (
                    StatusLevel::Degraded,
                    Some(format!(
                        "latency {elapsed}ms exceeds {healthy_ceiling_ms}ms budget"
                    )),
                )
            } else {
                (
                    StatusLevel::Error,
                    Some(format!(
                        "latency {elapsed}ms exceeds {degraded_ceiling_ms}ms error ceiling"
                    )),
                )
            }
        }

        // Observation from a different probe kind: report it, don't guess.
        _ => (
            StatusLevel::Error,
            Some("observation does not match probe kind".to_string()),
        ),
    }
}
