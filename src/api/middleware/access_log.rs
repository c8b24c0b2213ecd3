//! Combined-format access log line per request.

use axum::{
    extract::{ConnectInfo, Request},
    http::header,
    middleware::Next,
    response::Response,
};
use std::{net::SocketAddr, time::Instant};

/// Logs `ip - - "METHOD path VERSION" status - "referer" "user-agent" Nms`.
///
/// The client IP is `-` when the server was not started with connect info.
pub async fn layer(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "-".to_string());
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let version = format!("{:?}", req.version());
    let referer = header_or_dash(&req, header::REFERER);
    let ua = header_or_dash(&req, header::USER_AGENT);

    let response = next.run(req).await;

    tracing::info!(
        target: "access",
        r#"{ip} - - "{method} {path} {version}" {status} - "{referer}" "{ua}" {ms}ms"#,
        status = response.status().as_u16(),
        ms = start.elapsed().as_millis(),
    );

    response
}

fn header_or_dash(req: &Request, name: header::HeaderName) -> String {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string()
}
