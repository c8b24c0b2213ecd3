mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use voucher_redeemer::api::handlers::health_handler;

#[tokio::test]
async fn test_health_endpoint_reports_upstream_settings() {
    let state = common::create_test_state("http://127.0.0.1:9", 2_500);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert!(json.get("version").is_some());
    assert_eq!(json["upstream"]["base_url"], "http://127.0.0.1:9");
    assert_eq!(json["upstream"]["request_timeout_ms"], 2_500);
}
