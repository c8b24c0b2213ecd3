//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, validated, and passed explicitly
//! to the gateway and services. Business logic never reads the environment.
//!
//! ## Optional Variables
//!
//! - `PORT` - Listen port (default: `3000`)
//! - `HOST` - Bind host (default: `0.0.0.0`)
//! - `REQUEST_TIMEOUT_MS` - Upstream request timeout (default: `10000`, max: `120000`)
//! - `VOUCHER_BASE_URL` - Upstream voucher service (default: `https://gift.truemoney.com`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! ```bash
//! export PORT=8080
//! export REQUEST_TIMEOUT_MS=5000
//! ```

use anyhow::Result;
use std::env;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_VOUCHER_BASE_URL: &str = "https://gift.truemoney.com";

const MAX_REQUEST_TIMEOUT_MS: u64 = 120_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Upper bound for a single upstream redemption call, in milliseconds.
    pub request_timeout_ms: u64,
    /// Base URL of the upstream voucher service, without trailing slash.
    pub voucher_base_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            voucher_base_url: DEFAULT_VOUCHER_BASE_URL.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        let request_timeout_ms = env::var("REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.request_timeout_ms);

        let voucher_base_url = env::var("VOUCHER_BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.voucher_base_url);

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Self {
            host,
            port,
            request_timeout_ms,
            voucher_base_url,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `port` is 0
    /// - `request_timeout_ms` is 0 or above 120000
    /// - `log_format` is not `text` or `json`
    /// - `voucher_base_url` is not an http(s) URL
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            anyhow::bail!("PORT must be between 1 and 65535");
        }

        if self.request_timeout_ms == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_MS must be greater than 0");
        }

        if self.request_timeout_ms > MAX_REQUEST_TIMEOUT_MS {
            anyhow::bail!(
                "REQUEST_TIMEOUT_MS is too large (max: {}), got {}",
                MAX_REQUEST_TIMEOUT_MS,
                self.request_timeout_ms
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        match url::Url::parse(&self.voucher_base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => anyhow::bail!(
                "VOUCHER_BASE_URL must be an http(s) URL, got '{}'",
                self.voucher_base_url
            ),
        }

        Ok(())
    }

    /// Bind address in `host:port` form.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr());
        tracing::info!("  Voucher service: {}", self.voucher_base_url);
        tracing::info!("  Request timeout: {}ms", self.request_timeout_ms);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
