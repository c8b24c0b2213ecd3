//! API route configuration.

use crate::api::handlers::{extract_handler, redeem_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// Redemption routes. Public; callers are not authenticated.
///
/// # Endpoints
///
/// - `POST /redeem`  - Redeem a voucher for a mobile number
/// - `POST /extract` - Extract the campaign code from a link (no upstream call)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/redeem", post(redeem_handler))
        .route("/extract", post(extract_handler))
}
