#![cfg(test)]

//! Unit-test logging initialization.
//!
//! Idempotent and race-safe; level comes from `TEST_LOG`, then `RUST_LOG`,
//! then a quiet `warn` default.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: Once = Once::new();

pub fn init() {
    INITIALIZED.call_once(|| {
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
