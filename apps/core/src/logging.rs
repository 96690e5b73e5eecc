//! Tracing subscriber setup.
//!
//! Logs go to stderr so that stdout only carries classification output.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::LogConfig;
use crate::error::AppError;

/// Build the filter: `RUST_LOG` wins, otherwise the configured level
fn build_filter(config: &LogConfig) -> Result<EnvFilter, AppError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| AppError::Config(format!("Invalid log level '{}': {}", config.level, e))),
    }
}

/// Install the global subscriber.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init(config: &LogConfig) -> Result<(), AppError> {
    let filter = build_filter(config)?;

    let result = if config.json {
        Registry::default()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        Registry::default()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
    Ok(())
}
