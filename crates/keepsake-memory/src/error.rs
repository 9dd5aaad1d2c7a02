//! Error types for memory operations.

/// Errors returned by memory stores.
#[derive(Debug, thiserror::Error)]
pub enum MemoryError {
    /// Transport or body-decode error from the HTTP client.
    #[error("request error: {0}")]
    Http(#[from] reqwest::Error),
    /// The memory service answered with a non-success status.
    #[error("memory service answered with status {0}")]
    Status(u16),
    /// Serialization error.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
