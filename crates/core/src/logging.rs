//! Logging initialisation for Agora binaries and tests

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{CoreError, Result};

/// Initialise the global tracing subscriber.
///
/// The `RUST_LOG` environment variable overrides `default_level` when set.
pub fn init_logging(default_level: &str) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
        .map_err(|e| CoreError::logging_init(e.to_string()))?;

    Ok(())
}
