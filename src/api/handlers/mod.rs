//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod extract;
pub mod health;
pub mod redeem;

pub use extract::extract_handler;
pub use health::health_handler;
pub use redeem::redeem_handler;
