use async_trait::async_trait;
use keepsake_memory::{MemoryError, MemoryHit, MemoryStore};
use parking_lot::Mutex;

/// Memory store stub recording calls and serving configured hits.
#[derive(Default)]
pub struct StubMemoryStore {
    hits: Vec<MemoryHit>,
    /// Recorded `(user_id, text)` write calls.
    pub adds: Mutex<Vec<(String, String)>>,
    /// Recorded `(user_id, query)` search calls.
    pub searches: Mutex<Vec<(String, String)>>,
}

impl StubMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hits(hits: Vec<MemoryHit>) -> Self {
        Self {
            hits,
            ..Self::default()
        }
    }
}

#[async_trait]
impl MemoryStore for StubMemoryStore {
    async fn add(&self, user_id: &str, text: &str) -> Result<(), MemoryError> {
        self.adds
            .lock()
            .push((user_id.to_string(), text.to_string()));
        Ok(())
    }

    async fn search(&self, user_id: &str, query: &str) -> Result<Vec<MemoryHit>, MemoryError> {
        self.searches
            .lock()
            .push((user_id.to_string(), query.to_string()));
        Ok(self.hits.clone())
    }
}
