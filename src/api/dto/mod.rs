//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod extract;
pub mod field;
pub mod health;
pub mod redeem;
