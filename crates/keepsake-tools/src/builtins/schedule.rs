//! Built-in schedule lookup tool.

use crate::{Tool, ToolContext};
use async_trait::async_trait;
use keepsake_protocol::ToolError;
use log::info;
use serde_json::{Value, json};

/// Tool retrieving the bound user's schedule from the application database.
#[derive(Debug, Default)]
pub struct ScheduleTool;

#[async_trait]
impl Tool for ScheduleTool {
    fn name(&self) -> &str {
        "get_user_schedule"
    }

    fn description(&self) -> &str {
        "Retrieves the user's current schedule from the database."
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
        })
    }

    async fn call(&self, ctx: &ToolContext, _args: Value) -> Result<Value, ToolError> {
        let store = ctx.services.schedule.as_ref().ok_or_else(|| {
            ToolError::ExecutionFailed("schedule store not configured".to_string())
        })?;
        info!("schedule lookup (user_id={})", ctx.user_id);
        let events = store.patient_schedule(&ctx.user_id).await?;
        Ok(Value::String(format!(
            "The schedule in JSON format is {events}"
        )))
    }
}
