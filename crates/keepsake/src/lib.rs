//! Public SDK surface for keepsake.
//!
//! This crate re-exports the core building blocks and provides a small
//! initialization helper to keep consumer setup consistent.

/// Re-export for convenience.
pub use keepsake_config as config;
pub use keepsake_core as core;
/// Re-export for convenience.
pub use keepsake_memory as memory;
/// Re-export for convenience.
pub use keepsake_protocol as protocol;
/// Re-export for convenience.
pub use keepsake_server as server;
/// Re-export for convenience.
pub use keepsake_tools as tools;

#[inline]
/// Initialize logging using env_logger.
///
/// Binaries are expected to call this early in startup to ensure log output
/// is wired up.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
