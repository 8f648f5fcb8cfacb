// Logging setup

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Pick the log level from CLI flags, falling back to the configured level
pub fn resolve_level<'a>(verbose: bool, quiet: bool, configured: &'a str) -> &'a str {
    if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        configured
    }
}

/// Install the global tracing subscriber. `RUST_LOG` wins over `level`.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level '{}'", level))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
