//! Tracing bootstrap for binaries embedding the numrent core.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging.
///
/// Respects `RUST_LOG` when set; defaults to info-level output for the
/// numrent crates otherwise. Call once at startup.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "numrent=info".into()),
        )
        .with_target(true)
        .init();
}
