//! Request handlers: transport extraction, guard check, group execution,
//! and the status-code mapping (healthy→200, degraded→206, error→503).

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::extract::{ConnectInfo, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;
use tracing::warn;

use pulse_core::errors::PulseError;
use pulse_core::models::{StatusLevel, StatusReport};

use crate::service::{self, ProbeGroup};
use crate::state::ServerState;

const API_KEY_HEADER: &str = "x-api-key";
const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

pub async fn index() -> Response {
    Json(json!({
        "message": "Pulse Status Service",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/status - Public status check",
            "/health/db - Database health",
            "/health/fts - Full-text search health",
            "/health/performance - Query latency health",
            "/health/all - All health checks combined",
        ],
    }))
    .into_response()
}

pub async fn status(State(state): State<Arc<ServerState>>) -> Response {
    Json(json!({
        "service": "pulse",
        "status": StatusLevel::Healthy,
        "environment": state.config.server.environment,
        "timestamp": Utc::now(),
    }))
    .into_response()
}

pub async fn db_health(
    State(state): State<Arc<ServerState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Response {
    guarded_group(state, peer, headers, ProbeGroup::Database).await
}

pub async fn fts_health(
    State(state): State<Arc<ServerState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Response {
    guarded_group(state, peer, headers, ProbeGroup::Search).await
}

pub async fn performance_health(
    State(state): State<Arc<ServerState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Response {
    guarded_group(state, peer, headers, ProbeGroup::Performance).await
}

pub async fn all_health(
    State(state): State<Arc<ServerState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Response {
    if let Err(response) = check_guard(&state, peer, &headers) {
        return response;
    }
    match service::all_report(&state).await {
        Ok(report) => report_response(report),
        Err(e) => aggregation_error(e),
    }
}

async fn guarded_group(
    state: Arc<ServerState>,
    peer: SocketAddr,
    headers: HeaderMap,
    group: ProbeGroup,
) -> Response {
    if let Err(response) = check_guard(&state, peer, &headers) {
        return response;
    }
    match service::group_report(&state, group).await {
        Ok(report) => report_response(report),
        Err(e) => aggregation_error(e),
    }
}

/// Extract the presented key and client IP from the transport and consult
/// the policy. `Err` carries the ready 401 response.
fn check_guard(
    state: &Arc<ServerState>,
    peer: SocketAddr,
    headers: &HeaderMap,
) -> Result<(), Response> {
    let presented_key = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());
    let source_ip = client_ip(peer, headers);
    state
        .policy
        .authorize(presented_key, Some(source_ip))
        .map_err(|_| {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Authentication required" })),
            )
                .into_response()
        })
}

/// First `X-Forwarded-For` hop when present, otherwise the peer address.
fn client_ip(peer: SocketAddr, headers: &HeaderMap) -> IpAddr {
    headers
        .get(FORWARDED_FOR_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|raw| raw.split(',').next())
        .and_then(|first| first.trim().parse().ok())
        .unwrap_or_else(|| peer.ip())
}

fn report_response(report: StatusReport) -> Response {
    let code = match report.status {
        StatusLevel::Healthy => StatusCode::OK,
        StatusLevel::Degraded => StatusCode::PARTIAL_CONTENT,
        StatusLevel::Error => StatusCode::SERVICE_UNAVAILABLE,
    };
    (code, Json(report)).into_response()
}

/// Configuration faults reaching a handler are the caller's problem to see,
/// not something to paper over with a default level.
fn aggregation_error(error: PulseError) -> Response {
    warn!(error = %error, "aggregation failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "status": StatusLevel::Error,
            "error": error.to_string(),
            "timestamp": Utc::now(),
        })),
    )
        .into_response()
}
