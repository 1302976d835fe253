//! Logging initialization for binaries and tests.

use env_logger::Env;

/// Initializes the logger from `RUST_LOG`, defaulting to `info`. Safe to
/// call more than once; later calls are no-ops.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info")).try_init();
}
