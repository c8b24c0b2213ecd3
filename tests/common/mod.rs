#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use voucher_redeemer::application::services::RedemptionService;
use voucher_redeemer::config::Config;
use voucher_redeemer::infrastructure::http::HttpVoucherGateway;
use voucher_redeemer::state::AppState;

/// How the fake voucher service answers.
#[derive(Clone)]
pub enum Behavior {
    /// Fixed status and JSON body.
    Respond(StatusCode, Value),
    /// Fixed status and plain-text body.
    RespondText(StatusCode, &'static str),
    /// `{"code": <path code>, "mobile": <body.mobile>}` with 200.
    Echo,
    /// Never answers within any sane timeout.
    Hang,
}

#[derive(Clone)]
struct UpstreamState {
    behavior: Behavior,
    hits: Arc<AtomicUsize>,
    last_code: Arc<Mutex<Option<String>>>,
}

/// Fake upstream voucher service bound to a random local port.
pub struct MockUpstream {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    last_code: Arc<Mutex<Option<String>>>,
}

impl MockUpstream {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Decoded code from the last request path.
    pub fn last_code(&self) -> Option<String> {
        self.last_code.lock().unwrap().clone()
    }
}

pub async fn spawn_upstream(behavior: Behavior) -> MockUpstream {
    let hits = Arc::new(AtomicUsize::new(0));
    let last_code = Arc::new(Mutex::new(None));

    let state = UpstreamState {
        behavior,
        hits: hits.clone(),
        last_code: last_code.clone(),
    };

    let app = Router::new()
        .route("/campaign/vouchers/{code}/redeem", post(upstream_redeem))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockUpstream {
        base_url: format!("http://{addr}"),
        hits,
        last_code,
    }
}

async fn upstream_redeem(
    State(state): State<UpstreamState>,
    Path(code): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_code.lock().unwrap() = Some(code.clone());

    match state.behavior {
        Behavior::Respond(status, payload) => (status, Json(payload)).into_response(),
        Behavior::RespondText(status, text) => (status, text).into_response(),
        Behavior::Echo => Json(json!({ "code": code, "mobile": body["mobile"] })).into_response(),
        Behavior::Hang => {
            tokio::time::sleep(Duration::from_secs(30)).await;
            StatusCode::OK.into_response()
        }
    }
}

/// Base URL of a local port with nothing listening on it.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn test_config(base_url: &str, request_timeout_ms: u64) -> Config {
    Config {
        voucher_base_url: base_url.to_string(),
        request_timeout_ms,
        ..Config::default()
    }
}

pub fn create_test_state(base_url: &str, request_timeout_ms: u64) -> AppState {
    let config = test_config(base_url, request_timeout_ms);
    let gateway = HttpVoucherGateway::from_config(&config).unwrap();
    let service = Arc::new(RedemptionService::new(Arc::new(gateway)));

    AppState::new(service, &config)
}
