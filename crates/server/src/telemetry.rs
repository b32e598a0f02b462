use log::SetLoggerError;
use thiserror::Error;
use tracing::subscriber::{set_global_default, SetGlobalDefaultError};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Unable to redirect `log` records: {0}")]
    LogTracer(#[from] SetLoggerError),
    #[error("Unable to install the tracing subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Installs the process-wide subscriber: bunyan JSON lines on stdout, filtered
/// by `RUST_LOG` (or `default_filter` when unset). `log` macros from this
/// workspace and from sqlx are forwarded into it.
pub fn init_telemetry(name: &str, default_filter: &str) -> Result<(), TelemetryError> {
    LogTracer::init()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let formatting_layer = BunyanFormattingLayer::new(name.to_string(), std::io::stdout);

    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer);

    set_global_default(subscriber)?;

    Ok(())
}
