//! Logging initialization for the `tabws` binary.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `TABWS_LOG` environment variable. Falls back to the configured
//! `[logging] level` when the variable is unset or invalid.
//!
//! # Usage
//!
//! ```bash
//! # Configured level (info by default)
//! tabws list
//!
//! # Debug level
//! TABWS_LOG=debug tabws open /case/list
//!
//! # Module-specific filtering
//! TABWS_LOG=tab_workspace::store=trace,warn tabws list
//! ```

use crate::config::schema::LogLevel;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "TABWS_LOG";

/// Filter from `TABWS_LOG`, else from `fallback`.
pub fn filter(fallback: LogLevel) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback.as_filter()))
}

/// Initialize the tracing subscriber.
///
/// Output is written to stderr so command output on stdout stays clean.
/// Returns `false` if a global subscriber was already installed.
pub fn init(fallback: LogLevel) -> bool {
    fmt()
        .with_env_filter(filter(fallback))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
