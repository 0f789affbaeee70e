//! JSON log output for the `sleeper` binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::AppError;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_LOG_FILTER: &str = "info,sleeper=info,actix_web=info,sqlx=warn,sea_orm=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Events are flattened so `trace_id`,
/// `http.status_code` and friends sit at the top level of each JSON line,
/// next to the fields of the enclosing `request` span.
pub fn init_tracing() -> Result<(), AppError> {
    let fmt_layer = fmt::layer()
        .json()
        .flatten_event(true)
        .with_current_span(true)
        .with_span_list(false)
        .with_target(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
        .map_err(|e| AppError::config(format!("failed to install tracing subscriber: {e}")))
}
