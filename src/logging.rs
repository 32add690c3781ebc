// src/logging.rs
//! Tracing subscriber setup for binaries
//!
//! The library itself only emits `tracing` events; nothing is printed unless
//! a subscriber is installed.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a fmt subscriber honouring `RUST_LOG` (default `info`)
///
/// Idempotent, safe to call more than once.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .ok();
}
