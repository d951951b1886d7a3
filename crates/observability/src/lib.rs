//! Tracing and logging setup shared by binaries and tests.

pub mod config;
pub mod tracing;

pub use config::{LogConfig, LogFormat};
pub use crate::tracing::Fallbacks;

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize with an explicit configuration instead of the environment.
pub fn init_with(config: &LogConfig) -> bool {
    tracing::init_with(config)
}
