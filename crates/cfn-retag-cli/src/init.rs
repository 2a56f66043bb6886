// Tracing setup for the CLI

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing from the resolved log level.
///
/// RUST_LOG still wins when set, so operators can scope filtering to
/// individual modules without touching the config.
pub fn init_tracing(level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // Ignore error if already set (idempotent)
    let _ = tracing::subscriber::set_global_default(
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer()),
    );
}
