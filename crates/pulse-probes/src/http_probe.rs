//! HTTP endpoint probe built on a shared `reqwest` client.

use async_trait::async_trait;
use pulse_core::config::defaults::BODY_EXCERPT_MAX_BYTES;
use pulse_core::errors::ProbeError;
use pulse_core::models::{Observation, ProbeKind, ProbeSpec};
use pulse_core::traits::Probe;

/// GETs the spec's URL and records the status code plus a bounded body
/// excerpt for substring rule matching. Transport errors surface as faults
/// with the client's error text.
pub struct HttpProbe {
    spec: ProbeSpec,
    client: reqwest::Client,
}

impl HttpProbe {
    pub fn new(spec: ProbeSpec, client: reqwest::Client) -> Self {
        Self { spec, client }
    }
}

#[async_trait]
impl Probe for HttpProbe {
    fn spec(&self) -> &ProbeSpec {
        &self.spec
    }

    async fn observe(&self) -> Result<Observation, ProbeError> {
        let ProbeKind::Http { url, .. } = &self.spec.kind else {
            return Err(ProbeError::UnexpectedResponse {
                message: format!("probe '{}' is not an http probe", self.spec.name),
            });
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProbeError::RequestFailed {
                message: e.to_string(),
            })?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ProbeError::RequestFailed {
                message: e.to_string(),
            })?;

        Ok(Observation::HttpResponse {
            status,
            body_excerpt: truncate_excerpt(body, BODY_EXCERPT_MAX_BYTES),
        })
    }
}

/// Truncate to at most `max` bytes, backing off to a char boundary.
fn truncate_excerpt(mut body: String, max: usize) -> String {
    if body.len() > max {
        let mut cut = max;
        while cut > 0 && !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::truncate_excerpt;

    #[test]
    fn truncates_on_char_boundary() {
        let s = "héllo".to_string();
        // 'é' is two bytes starting at index 1; cutting at 2 must back off.
        assert_eq!(truncate_excerpt(s, 2), "h");
    }

    #[test]
    fn short_bodies_pass_through() {
        assert_eq!(truncate_excerpt("ok".to_string(), 10), "ok");
    }
}
