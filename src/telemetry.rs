//! Tracing subscriber setup shared by the server and the CLI.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `log_level` is an `EnvFilter` directive string (e.g. `info` or
/// `voucher_redeemer=debug,tower_http=info`); an invalid value falls back to
/// `info`. `log_format` selects `json` output, anything else is plain text.
pub fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
