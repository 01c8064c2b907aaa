//! # pulse-server
//!
//! HTTP service over the probe groups: one path per group, one path for the
//! full recursive aggregation, and a public heartbeat. Guarded paths check
//! the access policy before any probe runs; denial is a 401 rejection,
//! never a probe failure.

pub mod handlers;
pub mod service;
pub mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use pulse_core::config::PulseConfig;

pub use state::ServerState;

/// Build the service router.
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/status", get(handlers::status))
        .route("/health/db", get(handlers::db_health))
        .route("/health/fts", get(handlers::fts_health))
        .route("/health/performance", get(handlers::performance_health))
        .route("/health/all", get(handlers::all_health))
        .with_state(state)
}

/// Bind and serve until SIGINT/SIGTERM; in-flight requests complete before
/// exit.
pub async fn serve(config: PulseConfig) -> anyhow::Result<()> {
    let bind_addr = config.server.bind_addr.clone();
    let state = ServerState::from_config(config)?;
    let app = router(state).into_make_service_with_connect_info::<std::net::SocketAddr>();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("status service listening on {bind_addr} (Ctrl+C/SIGTERM to stop)");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("status service stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let ctrl_c = tokio::signal::ctrl_c();
        let mut sigterm = signal(SignalKind::terminate()).expect("failed to listen for SIGTERM");
        tokio::select! {
            _ = ctrl_c => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for Ctrl+C");
    }
}
