//! Logging setup utilities for the Kaiwa relay.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default filter directives used when `RUST_LOG` is not set.
///
/// The binary's own target (with `-` replaced by `_`), the shared crate and
/// `tower_http` request tracing all log at `default_log_level`.
pub fn default_directives(binary_name: &str, default_log_level: &str) -> String {
    format!(
        "{}={},{}={},tower_http={}",
        binary_name.replace('-', "_"),
        default_log_level,
        env!("CARGO_PKG_NAME").replace('-', "_"),
        default_log_level,
        default_log_level
    )
}

/// Initialize the tracing subscriber with the specified default log level.
///
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "kaiwa-server")
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use kaiwa_shared::logger::setup_logger;
///
/// setup_logger("kaiwa-server", "info");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
