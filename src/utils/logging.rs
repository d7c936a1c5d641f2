//! Logging setup
//!
//! Tracing subscriber configuration for the generator's debug/trace events.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Install a console subscriber at the given default level.
///
/// `RUST_LOG` overrides the level when set. Safe to call more than once;
/// only the first installation wins.
pub fn setup_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .ok();

    Ok(())
}
