//! Shared fixtures for integration tests
//!
//! Two toy annotation schemas with deliberately different storage: a
//! CCP-style token that keeps every part-of-speech tag it was given, and a
//! ClearTK-style token that holds a single tag plus a lemma.

// Each test binary compiles this module separately and uses a subset of it.
#![allow(dead_code)]

pub mod schemas;

/// Install a test-writer subscriber once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
