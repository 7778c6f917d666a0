//! Structured logging configuration.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

use crate::config::ServerConfig;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `log_level` from configuration.
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
pub fn init_tracing(config: &ServerConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_thread_ids(false))
            .try_init()?;
    }

    tracing::info!(
        level = %config.log_level,
        json = config.json_logs,
        "Logging initialized"
    );
    Ok(())
}
