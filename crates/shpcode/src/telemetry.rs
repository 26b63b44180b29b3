//! Logging setup.
//!
//! Library code logs through both `log` and `tracing`. The subscriber
//! installed here receives `tracing` events directly and `log` records
//! through `tracing_log::LogTracer`.

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("Failed to bridge log records: {0}")]
    LogBridge(#[from] log::SetLoggerError),
}

/// Maps `-v` repetitions to a default filter directive.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `RUST_LOG` wins; otherwise `default_directive` applies.
pub fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Installs the global subscriber. Output goes to stderr so stdout stays
/// clean for command results. Call once per process.
pub fn init_logging(default_directive: &str, json: bool) -> Result<(), TelemetryError> {
    let registry = tracing_subscriber::registry().with(build_filter(default_directive));

    if json {
        tracing::subscriber::set_global_default(
            registry.with(fmt::layer().json().with_writer(std::io::stderr)),
        )?;
    } else {
        tracing::subscriber::set_global_default(
            registry.with(fmt::layer().with_target(false).with_writer(std::io::stderr)),
        )?;
    }

    tracing_log::LogTracer::init()?;
    Ok(())
}
