//! Logging init: structured diagnostics to stderr only.
//!
//! Stdout carries nothing but digest lines, and the tool never writes to the
//! filesystem, so there is no log file.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the config supplies one.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter: `RUST_LOG` wins, then `default_directive`, then [`DEFAULT_FILTER`].
pub fn env_filter(default_directive: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        default_directive
            .and_then(|d| EnvFilter::try_new(d).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
    })
}

/// Initialize logging to stderr. Returns Err if a global subscriber is already set.
pub fn init_logging(default_directive: Option<&str>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_directive))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install tracing subscriber: {}", e))?;
    tracing::debug!("dualsum logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_an_error_not_a_panic() {
        // Either this test installs the subscriber first or another one did.
        let _ = init_logging(Some("off"));
        assert!(init_logging(Some("off")).is_err());
    }
}
