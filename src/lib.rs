//! # Voucher Redeemer
//!
//! HTTP gateway that redeems gift vouchers on behalf of a mobile number.
//! Callers send a campaign link in any of the known formats; the service
//! extracts the voucher code, forwards a single redemption request upstream
//! and normalizes the answer into `{success, data}` or `{success, error}`.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Campaign code, redemption request, failure taxonomy, gateway trait
//! - **Application Layer** ([`application`]) - Redemption orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest client for the upstream service
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//! - **Utilities** ([`utils`]) - Campaign code extraction
//!
//! ## Quick Start
//!
//! ```bash
//! export PORT=3000
//! export REQUEST_TIMEOUT_MS=10000
//! cargo run
//!
//! curl -X POST localhost:3000/redeem \
//!   -H 'Content-Type: application/json' \
//!   -d '{"mobile_number":"0812345678","campaign_link":"https://gift.truemoney.com/campaign/?v=CODE"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod telemetry;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RedemptionService;
    pub use crate::config::Config;
    pub use crate::domain::entities::{CampaignCode, RedemptionRequest};
    pub use crate::domain::{RedeemError, UpstreamErrorCode};
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::HttpVoucherGateway;
    pub use crate::state::AppState;
    pub use crate::utils::code_extractor::extract_campaign_code;
}
