#![cfg(test)]

//! Test logging, shared by unit tests through the `ctor` hook in `lib.rs`.
//!
//! Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`. Output goes
//! through the test writer so cargo captures it per test.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Idempotent; a subscriber installed elsewhere wins silently.
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
            .ok();
    });
}
