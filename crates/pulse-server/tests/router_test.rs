//! Router tests: guard wiring, public paths, and the status-code mapping.

use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::connect_info::MockConnectInfo;
use axum::http::{Request, StatusCode};
use rusqlite::Connection;
use tempfile::TempDir;
use tower::util::ServiceExt;

use pulse_core::config::{GuardConfig, PulseConfig};
use pulse_server::{router, ServerState};

fn seeded_db(dir: &TempDir, rows: usize) -> std::path::PathBuf {
    let path = dir.path().join("pulse.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "
        CREATE TABLE records (name TEXT, external_id TEXT, description TEXT);
        CREATE VIRTUAL TABLE records_fts USING fts5(
            name, description, content='records', content_rowid='rowid'
        );
        ",
    )
    .unwrap();
    for i in 0..rows {
        conn.execute(
            "INSERT INTO records (name, external_id, description) VALUES (?1, ?2, ?3)",
            rusqlite::params![format!("record {i}"), format!("ext-{i}"), "probe text"],
        )
        .unwrap();
    }
    conn.execute_batch("INSERT INTO records_fts(records_fts) VALUES('rebuild');")
        .unwrap();
    path
}

fn test_config(dir: &TempDir, guard: GuardConfig) -> PulseConfig {
    let mut config = PulseConfig::default();
    config.store.db_path = Some(seeded_db(dir, 5));
    config.store.min_records = 3;
    config.store.max_records = 10;
    config.guard = guard;
    config
}

fn app(config: PulseConfig) -> axum::Router {
    let state = ServerState::from_config(config).unwrap();
    router(state).layer(MockConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40000))))
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Public paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_lists_the_endpoints() {
    let dir = TempDir::new().unwrap();
    let app = app(test_config(&dir, GuardConfig::open()));
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["endpoints"].as_array().unwrap().len() >= 4);
}

#[tokio::test]
async fn public_status_bypasses_the_guard() {
    let dir = TempDir::new().unwrap();
    let guard = GuardConfig {
        api_key: Some("secret".to_string()),
        allowed_ips: vec![],
    };
    let app = app(test_config(&dir, guard));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
}

// ---------------------------------------------------------------------------
// Guarded paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn guarded_path_without_credentials_is_401() {
    let dir = TempDir::new().unwrap();
    let guard = GuardConfig {
        api_key: Some("secret".to_string()),
        allowed_ips: vec![],
    };
    let app = app(test_config(&dir, guard));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/db")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Authentication required");
}

#[tokio::test]
async fn presented_key_authorizes_the_probe_run() {
    let dir = TempDir::new().unwrap();
    let guard = GuardConfig {
        api_key: Some("secret".to_string()),
        allowed_ips: vec![],
    };
    let app = app(test_config(&dir, guard));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/db")
                .header("x-api-key", "secret")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn forwarded_allowlisted_ip_authorizes() {
    let dir = TempDir::new().unwrap();
    let guard = GuardConfig {
        api_key: Some("secret".to_string()),
        allowed_ips: vec!["198.51.100.0/24".to_string()],
    };
    let app = app(test_config(&dir, guard));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/db")
                .header("x-forwarded-for", "198.51.100.9, 10.0.0.1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Status-code mapping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn degraded_aggregate_maps_to_206() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(&dir, GuardConfig::open());
    // 5 rows against a floor of 1000: record count degrades, nothing errors.
    config.store.min_records = 1_000;
    config.store.max_records = 2_000;
    let app = app(config);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/db")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert!(!json["summary"]["failures"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn failing_store_maps_to_503() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(&dir, GuardConfig::open());
    config.store.table = "missing".to_string();
    let app = app(config);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/db")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn all_health_nests_the_three_groups() {
    let dir = TempDir::new().unwrap();
    let mut config = test_config(&dir, GuardConfig::open());
    config.search.terms = vec![pulse_core::config::SearchTermConfig {
        term: "probe".to_string(),
        min_matches: 1,
    }];
    let app = app(config);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health/all")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    // A slow machine may push a latency probe into its degraded band, but
    // nothing here should ever be an error.
    assert!(matches!(
        response.status(),
        StatusCode::OK | StatusCode::PARTIAL_CONTENT
    ));
    let json = body_json(response).await;
    let names: Vec<&str> = json["checks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["database", "full_text_search", "performance"]);
}
