use crate::{StubScheduleStore, StubWeatherProvider};
use keepsake_tools::{ToolContext, TurnServices};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Build a tool context wired to stub providers for a test user.
pub fn base_tool_context(user_id: &str) -> ToolContext {
    ToolContext {
        session_id: Uuid::nil(),
        user_id: user_id.to_string(),
        services: Arc::new(TurnServices {
            weather: Some(Arc::new(StubWeatherProvider::new("Cloudy +12°C"))),
            schedule: Some(Arc::new(StubScheduleStore::new(json!([])))),
        }),
    }
}
