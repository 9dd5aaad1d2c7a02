//! Tool execution context shared across a session's turns.

use crate::schedule::ScheduleStore;
use crate::weather::WeatherProvider;
use keepsake_protocol::SessionId;
use std::sync::Arc;

/// Shared service dependencies for a session (constructed once, shared via Arc).
pub struct TurnServices {
    /// Optional weather provider for the weather tool.
    pub weather: Option<Arc<dyn WeatherProvider>>,
    /// Optional schedule store for the schedule tool.
    pub schedule: Option<Arc<dyn ScheduleStore>>,
}

/// Context passed to tools during execution.
///
/// The user id is bound once per session when the participant joins; shared
/// service references live behind an `Arc<TurnServices>` so cloning per tool
/// call is a cheap reference-count bump.
#[derive(Clone)]
pub struct ToolContext {
    /// Session id associated with the tool call.
    pub session_id: SessionId,
    /// User id the session is bound to.
    pub user_id: String,
    /// Shared session-scoped services (cheap Arc clone).
    pub services: Arc<TurnServices>,
}

impl std::fmt::Debug for ToolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContext")
            .field("session_id", &self.session_id)
            .field("user_id", &self.user_id)
            .finish()
    }
}
