//! HTTP middleware for request processing.
//!
//! Provides request tracing spans and a combined-format access log.

pub mod access_log;
pub mod tracing;
