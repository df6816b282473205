//! Logging utilities

use crate::config::LogSettings;
use tracing_subscriber::EnvFilter;

const ELLIPSIS: &str = "…";

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when it is set. Returns `false`
/// when a subscriber was already installed, which happens whenever several
/// tests in one binary initialize logging.
pub fn init_logger(settings: &LogSettings) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.as_str()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if settings.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.is_ok()
}

/// Truncate free text before it reaches a log line.
///
/// Notification bodies can carry anything a user typed, so only a short
/// prefix of a title is ever logged.
pub fn sanitize_for_log(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let prefix: String = value.chars().take(max_chars).collect();
    format!("{}{}", prefix, ELLIPSIS)
}
