//! Tracing setup for the newpost CLI
//!
//! Logs go to stderr so stdout carries only the one-line result.
//!
//! Usage:
//!   newpost "My Post"                        # warnings only
//!   RUST_LOG=debug newpost "My Post"         # show resolved paths
//!   RUST_LOG=newpost_core=info newpost ...   # fine-grained control

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Initialize console tracing, honoring `RUST_LOG` when set
pub fn init_tracing() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
