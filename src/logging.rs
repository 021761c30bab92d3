//! Tracing setup.
//!
//! `RUST_LOG` takes precedence; otherwise `info`, or `debug` with `--debug`.

use tracing_subscriber::EnvFilter;

use crate::errors::{BloatkillError, Result};

pub fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| BloatkillError::Logging {
            details: err.to_string(),
        })
}
