//! Registry for tool implementations.

use crate::context::ToolContext;
use crate::tool::{Tool, ToolSpec};
use keepsake_protocol::ToolError;
use log::debug;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory registry for tool implementations.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    /// Map of tool name to implementation.
    tools: Arc<RwLock<HashMap<String, Arc<dyn Tool>>>>,
}

impl ToolRegistry {
    /// Create an empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool by name.
    pub fn register(&self, tool: Arc<dyn Tool>) {
        debug!("registering tool (name={})", tool.name());
        self.tools.write().insert(tool.name().to_string(), tool);
    }

    /// Fetch a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.read().get(name).cloned()
    }

    /// List all registered tool names.
    pub fn list(&self) -> Vec<String> {
        self.tools.read().keys().cloned().collect()
    }

    /// Return all registered tool instances.
    pub fn all(&self) -> Vec<Arc<dyn Tool>> {
        self.tools.read().values().cloned().collect()
    }

    /// Return tool specs for all registered tools.
    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools.read().values().map(|tool| tool.spec()).collect()
    }

    /// Dispatch a call to a registered tool by name.
    pub async fn dispatch(
        &self,
        name: &str,
        ctx: &ToolContext,
        args: Value,
    ) -> Result<Value, ToolError> {
        let tool = self
            .get(name)
            .ok_or_else(|| ToolError::ToolNotFound(name.to_string()))?;
        tool.call(ctx, args).await
    }
}

#[cfg(test)]
mod tests {
    use super::ToolRegistry;
    use crate::{Tool, ToolContext};
    use async_trait::async_trait;
    use keepsake_protocol::ToolError;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::fmt;
    use std::sync::Arc;

    #[derive(Clone)]
    struct DummyTool {
        name: &'static str,
    }

    impl fmt::Debug for DummyTool {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "DummyTool({})", self.name)
        }
    }

    #[async_trait]
    impl Tool for DummyTool {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "dummy"
        }

        fn args_schema(&self) -> serde_json::Value {
            json!({})
        }

        async fn call(
            &self,
            _ctx: &ToolContext,
            _args: serde_json::Value,
        ) -> Result<serde_json::Value, ToolError> {
            Ok(json!({}))
        }
    }

    #[test]
    fn registry_tracks_tools_and_specs() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(DummyTool { name: "get_weather" }));
        registry.register(Arc::new(DummyTool {
            name: "get_user_schedule",
        }));

        let mut names = registry.list();
        names.sort();
        assert_eq!(names, vec!["get_user_schedule", "get_weather"]);

        let specs = registry.specs();
        let mut spec_names = specs.into_iter().map(|spec| spec.name).collect::<Vec<_>>();
        spec_names.sort();
        assert_eq!(spec_names, vec!["get_user_schedule", "get_weather"]);
    }

    #[tokio::test]
    async fn dispatch_rejects_unknown_tool() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(DummyTool { name: "get_weather" }));

        let ctx = ToolContext {
            session_id: uuid::Uuid::nil(),
            user_id: "u1".to_string(),
            services: Arc::new(crate::TurnServices {
                weather: None,
                schedule: None,
            }),
        };
        let result = registry.dispatch("get_weather", &ctx, json!({})).await;
        assert!(result.is_ok());

        let err = registry
            .dispatch("get_news", &ctx, json!({}))
            .await
            .expect_err("unknown tool");
        let ToolError::ToolNotFound(name) = err else {
            panic!("expected tool not found");
        };
        assert_eq!(name, "get_news");
    }
}
