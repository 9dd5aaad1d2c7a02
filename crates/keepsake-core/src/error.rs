//! Error types for the core session crate.

use keepsake_memory::MemoryError;
use thiserror::Error;

/// Errors returned by session operations.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Room connection or signaling failed.
    #[error("room error: {0}")]
    Room(String),
    /// A required participant attribute is absent or blank.
    #[error("missing participant attribute: {0}")]
    MissingAttribute(String),
    /// Memory service error.
    #[error("memory error: {0}")]
    Memory(#[from] MemoryError),
    /// Voice pipeline error.
    #[error("pipeline error: {0}")]
    Pipeline(String),
    /// Context splice index was out of range.
    #[error("context index out of range: {0}")]
    ContextIndex(usize),
}
