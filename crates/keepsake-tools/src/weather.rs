//! Weather provider interface and the wttr.in text endpoint client.

use async_trait::async_trait;
use keepsake_protocol::ToolError;
use log::debug;

/// Weather provider interface for the weather tool.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the current weather summary for a location.
    async fn current(&self, location: &str) -> Result<String, ToolError>;
}

/// Client for a wttr.in-style plain-text weather endpoint.
#[derive(Debug, Clone)]
pub struct WttrClient {
    client: reqwest::Client,
    base_url: String,
    format: String,
}

impl WttrClient {
    /// Create a client against a weather endpoint with a format string.
    pub fn new(base_url: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            format: format.into(),
        }
    }
}

#[async_trait]
impl WeatherProvider for WttrClient {
    async fn current(&self, location: &str) -> Result<String, ToolError> {
        // The format string contains literal `%C+%t` placeholders the
        // endpoint expects unencoded, so the URL is assembled by hand.
        let url = format!("{}/{}?format={}", self.base_url, location, self.format);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| ToolError::ExecutionFailed(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::UpstreamStatus(status.as_u16()));
        }
        let body = response
            .text()
            .await
            .map_err(|err| ToolError::ExecutionFailed(err.to_string()))?;
        debug!(
            "fetched weather (location_len={}, body_len={})",
            location.len(),
            body.len()
        );
        Ok(body.trim().to_string())
    }
}
