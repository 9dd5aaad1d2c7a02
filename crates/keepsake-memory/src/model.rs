//! Memory search hit model.

use serde::{Deserialize, Serialize};

/// Single hit returned by a memory search.
///
/// The memory record itself is owned by the remote service; only the fields
/// this system reads are modeled, everything else is ignored on decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemoryHit {
    /// Remote record identifier.
    #[serde(default)]
    pub id: String,
    /// Recalled memory text.
    pub memory: String,
    /// Similarity score assigned by the service.
    #[serde(default)]
    pub score: Option<f32>,
}

impl MemoryHit {
    /// Build a hit carrying only memory text.
    pub fn new(memory: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            memory: memory.into(),
            score: None,
        }
    }
}
