//! Schedule store interface and the Convex point-query client.

use async_trait::async_trait;
use keepsake_protocol::ToolError;
use log::debug;
use serde::Deserialize;
use serde_json::{Value, json};

/// Convex function invoked for schedule lookups.
const SCHEDULE_QUERY_PATH: &str = "agentroom:getPatientSchedule";

/// Schedule store interface for the schedule tool.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Point query for a patient's schedule.
    async fn patient_schedule(&self, patient_id: &str) -> Result<Value, ToolError>;
}

/// Client for the application database's Convex query API.
#[derive(Debug, Clone)]
pub struct ConvexScheduleClient {
    client: reqwest::Client,
    base_url: String,
    query_key: String,
}

/// Convex query response envelope.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    status: String,
    #[serde(default)]
    value: Option<Value>,
    #[serde(default, rename = "errorMessage")]
    error_message: Option<String>,
}

impl ConvexScheduleClient {
    /// Create a client against a Convex deployment with a static query key.
    pub fn new(base_url: impl Into<String>, query_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            query_key: query_key.into(),
        }
    }
}

#[async_trait]
impl ScheduleStore for ConvexScheduleClient {
    async fn patient_schedule(&self, patient_id: &str) -> Result<Value, ToolError> {
        let url = format!("{}/api/query", self.base_url);
        let request = json!({
            "path": SCHEDULE_QUERY_PATH,
            "args": {
                "patient_id": patient_id,
                "key": self.query_key,
            },
            "format": "json",
        });
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|err| ToolError::ExecutionFailed(err.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ToolError::UpstreamStatus(status.as_u16()));
        }
        let envelope: QueryResponse = response
            .json()
            .await
            .map_err(|err| ToolError::ExecutionFailed(err.to_string()))?;
        if envelope.status != "success" {
            return Err(ToolError::ExecutionFailed(
                envelope
                    .error_message
                    .unwrap_or_else(|| "schedule query failed".to_string()),
            ));
        }
        debug!("fetched schedule (patient_id_len={})", patient_id.len());
        Ok(envelope.value.unwrap_or(Value::Null))
    }
}
