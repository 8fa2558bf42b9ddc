pub mod commands;
pub mod engine;
pub mod icon;
pub mod narration;
pub mod persistence;
pub mod settings;

use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr; stdout carries the operator report.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    tracing::debug!("promo-tools v{}", env!("CARGO_PKG_VERSION"));
}
