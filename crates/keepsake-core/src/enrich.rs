//! Memory enrichment hook run before each inference turn.

use crate::context::ChatContext;
use crate::error::AgentError;
use crate::pipeline::TurnHook;
use async_trait::async_trait;
use keepsake_memory::{MemoryHit, MemoryStore};
use keepsake_protocol::Message;
use log::info;
use std::sync::Arc;

/// Prefix for the synthetic context entry carrying recalled memories.
const MEMORY_NOTE_PREFIX: &str = "Relevant Memory: ";

/// Persists each user utterance and splices recalled memories into the
/// conversation context ahead of it.
pub struct MemoryEnricher {
    store: Arc<dyn MemoryStore>,
    user_id: String,
}

impl MemoryEnricher {
    /// Create an enricher bound to one user.
    pub fn new(store: Arc<dyn MemoryStore>, user_id: impl Into<String>) -> Self {
        Self {
            store,
            user_id: user_id.into(),
        }
    }
}

#[async_trait]
impl TurnHook for MemoryEnricher {
    async fn before_inference(&self, context: &mut ChatContext) -> Result<(), AgentError> {
        let Some(user_message) = context.last().cloned() else {
            return Ok(());
        };

        // One write and one search per turn, both issued unconditionally.
        self.store.add(&self.user_id, &user_message.content).await?;
        let hits = self
            .store
            .search(&self.user_id, &user_message.content)
            .await?;
        if hits.is_empty() {
            return Ok(());
        }

        let memories = join_memories(&hits);
        info!(
            "enriching context with recalled memories (user_id={}, hits={})",
            self.user_id,
            hits.len()
        );
        let note = Message::assistant(format!("{MEMORY_NOTE_PREFIX}{memories}"));
        let index = context.len() - 1;
        context.insert_before(index, note)?;
        Ok(())
    }
}

/// Space-join recalled memory texts in returned order.
fn join_memories(hits: &[MemoryHit]) -> String {
    hits.iter()
        .map(|hit| hit.memory.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
