//! Built-in weather lookup tool.

use crate::builtins::utils::parse_args;
use crate::{Tool, ToolContext};
use async_trait::async_trait;
use keepsake_protocol::ToolError;
use log::info;
use serde::Deserialize;
use serde_json::{Value, json};

/// Tool answering weather questions through the configured provider.
#[derive(Debug, Default)]
pub struct WeatherTool;

/// Arguments for WeatherTool.
#[derive(Debug, Deserialize)]
struct WeatherArgs {
    location: String,
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Called when the user asks about the weather. Returns the weather for the given location."
    }

    fn args_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "location": {
                    "type": "string",
                    "description": "The location to get the weather for.",
                },
            },
            "required": ["location"],
        })
    }

    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value, ToolError> {
        let input: WeatherArgs = parse_args(args)?;
        if input.location.trim().is_empty() {
            return Err(ToolError::InvalidArguments(
                "location cannot be empty".to_string(),
            ));
        }
        let provider = ctx.services.weather.as_ref().ok_or_else(|| {
            ToolError::ExecutionFailed("weather provider not configured".to_string())
        })?;
        info!(
            "weather lookup (user_id={}, location_len={})",
            ctx.user_id,
            input.location.len()
        );
        let report = provider.current(&input.location).await?;
        Ok(Value::String(format!(
            "The weather in {} is {}.",
            input.location, report
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::WeatherTool;
    use crate::{Tool, ToolContext, TurnServices, WeatherProvider};
    use async_trait::async_trait;
    use keepsake_protocol::ToolError;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Arc;
    use uuid::Uuid;

    #[derive(Default)]
    struct DummyWeather {
        last_location: Mutex<Option<String>>,
    }

    #[async_trait]
    impl WeatherProvider for DummyWeather {
        async fn current(&self, location: &str) -> Result<String, ToolError> {
            *self.last_location.lock() = Some(location.to_string());
            Ok("Sunny +21°C".to_string())
        }
    }

    fn base_context() -> ToolContext {
        ToolContext {
            session_id: Uuid::nil(),
            user_id: "u1".to_string(),
            services: Arc::new(TurnServices {
                weather: None,
                schedule: None,
            }),
        }
    }

    #[tokio::test]
    async fn weather_rejects_empty_location() {
        let ctx = base_context();
        let tool = WeatherTool;
        let err = tool
            .call(&ctx, json!({ "location": " " }))
            .await
            .expect_err("empty location");
        let ToolError::InvalidArguments(message) = err else {
            panic!("expected invalid arguments");
        };
        assert_eq!(message, "location cannot be empty");
    }

    #[tokio::test]
    async fn weather_errors_without_provider() {
        let ctx = base_context();
        let tool = WeatherTool;
        let err = tool
            .call(&ctx, json!({ "location": "Paris" }))
            .await
            .expect_err("missing provider");
        let ToolError::ExecutionFailed(message) = err else {
            panic!("expected execution failed");
        };
        assert_eq!(message, "weather provider not configured");
    }

    #[tokio::test]
    async fn weather_embeds_location_and_report() {
        let provider = Arc::new(DummyWeather::default());
        let ctx = ToolContext {
            services: Arc::new(TurnServices {
                weather: Some(provider.clone()),
                schedule: None,
            }),
            ..base_context()
        };
        let tool = WeatherTool;
        let result = tool
            .call(&ctx, json!({ "location": "Paris" }))
            .await
            .expect("weather");

        assert_eq!(
            result,
            json!("The weather in Paris is Sunny +21°C.")
        );
        let location = provider.last_location.lock().clone().expect("location");
        assert_eq!(location, "Paris".to_string());
    }
}
