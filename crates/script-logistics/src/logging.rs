// File: crates/script-logistics/src/logging.rs
// Summary: tracing subscriber bootstrap shared by script binaries.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber writing to stderr. `RUST_LOG` overrides `default_filter`.
/// Returns false when a subscriber was already installed.
pub fn init(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
