//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber used by the host shim. The
//! engine itself only emits spans and events through the `tracing` macros; a
//! library consumer that installs its own subscriber should simply not call
//! [`init_tracing`].

use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with an env-filtered fmt layer.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set
/// 2. The `RUST_LOG` environment variable
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// Idempotent: safe to call multiple times, only the first call takes effect.
/// Diagnostics go to stderr so they never mix with projected output on stdout.
pub fn init_tracing(config: &Config) {
    let filter = config.trace_level.as_ref().map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        |level| EnvFilter::new(level.clone()),
    );

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}
