//! Infrastructure layer for external integrations.
//!
//! Implements the gateway traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - reqwest client for the upstream voucher service

pub mod http;
