//! Tracing subscriber setup. Logs go to stderr so stdout carries only the view.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::LogLevel;
use crate::error::CliError;

/// Install the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init_logging(level: LogLevel) -> Result<(), CliError> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(level)))
        .map_err(|e| CliError::Logging(format!("failed to create log filter: {e}")))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

fn default_directives(level: LogLevel) -> String {
    let level = level.as_str();
    format!("quoteboard={level},quoteboard_core={level}")
}
