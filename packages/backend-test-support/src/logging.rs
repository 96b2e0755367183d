//! Unified test logging initialization
//!
//! Same policy as the backend's unit-test bootstrap, exposed for integration
//! test binaries which cannot reach the crate's `#[cfg(test)]` modules.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize structured logging for tests.
///
/// Idempotent. The level is read from `TEST_LOG`, then `RUST_LOG`, then
/// defaults to `"warn"`. Output goes through `with_test_writer()` so cargo
/// captures it per test.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok(); // something else may already own the global subscriber
    });
}
