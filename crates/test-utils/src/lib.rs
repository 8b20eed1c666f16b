//! Shared test utilities for ui5lint crates.
//!
//! - [`assertions`]: formatting helpers for insta snapshots
//! - [`fixtures`]: source-map payloads and byte sources that yield in chunks
//! - [`init_test_tracing`]: opt-in log output for failing tests

pub mod assertions;
pub mod fixtures;

pub use assertions::{format_items, format_texts};
pub use fixtures::{source_map, ChunkedReader};

/// Route `tracing` output to the test harness.
///
/// Respects `RUST_LOG`; calling it more than once is harmless.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
