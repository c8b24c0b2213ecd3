mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use common::{Behavior, MockUpstream, spawn_upstream};
use serde_json::json;
use std::time::{Duration, Instant};
use voucher_redeemer::api::handlers::redeem_handler;
use voucher_redeemer::domain::UpstreamErrorCode;

fn server_for(upstream: &MockUpstream, timeout_ms: u64) -> TestServer {
    let state = common::create_test_state(&upstream.base_url, timeout_ms);
    let app = Router::new()
        .route("/redeem", post(redeem_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redeem_success_wraps_upstream_payload() {
    let payload = json!({
        "status": { "code": "SUCCESS", "message": "success" },
        "data": { "my_ticket": { "amount_baht": "10.00" } }
    });
    let upstream = spawn_upstream(Behavior::Respond(StatusCode::OK, payload.clone())).await;
    let server = server_for(&upstream, 5_000);

    let response = server
        .post("/redeem")
        .json(&json!({
            "mobile_number": "0812345678",
            "campaign_link": "https://gift.truemoney.com/campaign/?v=019a7f3c"
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], payload);
    assert_eq!(upstream.hits(), 1);
    assert_eq!(upstream.last_code().as_deref(), Some("019a7f3c"));
}

#[tokio::test]
async fn test_redeem_missing_link_makes_no_upstream_call() {
    let upstream = spawn_upstream(Behavior::Echo).await;
    let server = server_for(&upstream, 5_000);

    let response = server
        .post("/redeem")
        .json(&json!({ "mobile_number": "0812345678", "campaign_link": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "missing required field: campaign_link");
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_redeem_absent_fields_are_reported() {
    let upstream = spawn_upstream(Behavior::Echo).await;
    let server = server_for(&upstream, 5_000);

    let response = server.post("/redeem").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["error"],
        "missing required field: campaign_link, mobile_number"
    );
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_redeem_null_mobile_is_reported_as_missing() {
    let upstream = spawn_upstream(Behavior::Echo).await;
    let server = server_for(&upstream, 5_000);

    let response = server
        .post("/redeem")
        .json(&json!({ "mobile_number": null, "campaign_link": "vouchers/X" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "missing required field: mobile_number");
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_redeem_non_string_link_is_extraction_error() {
    let upstream = spawn_upstream(Behavior::Echo).await;
    let server = server_for(&upstream, 5_000);

    let response = server
        .post("/redeem")
        .json(&json!({ "mobile_number": "0812345678", "campaign_link": 42 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "cannot extract campaign code from campaign link"
    );
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_redeem_invalid_json_body() {
    let upstream = spawn_upstream(Behavior::Echo).await;
    let server = server_for(&upstream, 5_000);

    let response = server.post("/redeem").text("{not json").await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_redeem_unextractable_link() {
    let upstream = spawn_upstream(Behavior::Echo).await;
    let server = server_for(&upstream, 5_000);

    let response = server
        .post("/redeem")
        .json(&json!({
            "mobile_number": "0812345678",
            "campaign_link": "https://gift.truemoney.com/campaign?v="
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["error"],
        "cannot extract campaign code from campaign link"
    );
    assert_eq!(upstream.hits(), 0);
}

#[tokio::test]
async fn test_redeem_upstream_not_found_is_mapped() {
    let upstream = spawn_upstream(Behavior::Respond(
        StatusCode::BAD_REQUEST,
        json!({ "code": "VOUCHER_NOT_FOUND" }),
    ))
    .await;
    let server = server_for(&upstream, 5_000);

    let response = server
        .post("/redeem")
        .json(&json!({
            "mobile_number": "0812345678",
            "campaign_link": "https://gift.truemoney.com/campaign/vouchers/BAD/redeem"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "VOUCHER_NOT_FOUND");
    assert_eq!(
        json["error"],
        UpstreamErrorCode::VoucherNotFound.user_message("")
    );
    assert_eq!(json["upstream"], json!({ "code": "VOUCHER_NOT_FOUND" }));
    assert_eq!(upstream.last_code().as_deref(), Some("BAD"));
}

#[tokio::test]
async fn test_redeem_upstream_server_error_status_is_relayed() {
    let upstream = spawn_upstream(Behavior::Respond(
        StatusCode::SERVICE_UNAVAILABLE,
        json!({ "status": { "code": "MAINTENANCE", "message": "down for maintenance" } }),
    ))
    .await;
    let server = server_for(&upstream, 5_000);

    let response = server
        .post("/redeem")
        .json(&json!({
            "mobile_number": "0812345678",
            "campaign_link": "vouchers/QWERTY"
        }))
        .await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "MAINTENANCE");
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("down for maintenance")
    );
}

#[tokio::test]
async fn test_redeem_upstream_timeout_is_network_error() {
    let upstream = spawn_upstream(Behavior::Hang).await;
    let server = server_for(&upstream, 300);

    let started = Instant::now();
    let response = server
        .post("/redeem")
        .json(&json!({
            "mobile_number": "0812345678",
            "campaign_link": "https://gift.truemoney.com/campaign/?v=SLOW"
        }))
        .await;
    let elapsed = started.elapsed();

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "no response from campaign server");
    assert!(json.get("upstream").is_none());
    assert!(elapsed < Duration::from_millis(300) + Duration::from_secs(2));
}
