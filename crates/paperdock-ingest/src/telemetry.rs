//! Tracing initialization for embedding binaries and tests.

use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize a console tracing subscriber with an env-driven filter.
///
/// Safe to call more than once; subsequent calls are no-ops.
pub fn init_tracing() {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "paperdock=debug".into()))
        .with(console_fmt)
        .try_init();
}
