//! Logging setup.
//!
//! The library only emits `tracing` events. Binaries and tests that want to
//! see them install the subscriber built here.
//!
//! # Environment Variables
//!
//! - `FIELDCHECK_LOG` - filter directives, e.g. `fieldcheck_validation=debug`
//! - `RUST_LOG` - used when `FIELDCHECK_LOG` is unset
//! - `NO_COLOR` - disable ANSI colors

use std::env;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

pub const LOG_ENV: &str = "FIELDCHECK_LOG";

const DEFAULT_FILTER: &str = "info";

/// Filter from `FIELDCHECK_LOG`, then `RUST_LOG`, then `info`.
pub fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Create a subscriber that respects the fieldcheck environment.
pub fn subscriber() -> impl tracing::Subscriber + Send + Sync {
    let color = env::var_os("NO_COLOR").is_none();

    tracing_subscriber::registry()
        .with(filter())
        .with(fmt::layer().with_ansi(color).with_target(true))
}

/// Install the subscriber globally. Returns false if one was already set.
pub fn init() -> bool {
    tracing::subscriber::set_global_default(subscriber()).is_ok()
}
