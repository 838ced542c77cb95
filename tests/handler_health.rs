mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use url_alias::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (_dir, state) = common::create_sqlite_state().await;
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["storage"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(common::create_broken_state());

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["storage"]["status"], "error");
}
