use async_trait::async_trait;
use keepsake_protocol::ToolError;
use keepsake_tools::{ScheduleStore, WeatherProvider};
use parking_lot::Mutex;
use serde_json::Value;

/// Weather provider stub serving a fixed report.
pub struct StubWeatherProvider {
    report: String,
    /// Recorded lookup locations.
    pub locations: Mutex<Vec<String>>,
}

impl StubWeatherProvider {
    pub fn new(report: impl Into<String>) -> Self {
        Self {
            report: report.into(),
            locations: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl WeatherProvider for StubWeatherProvider {
    async fn current(&self, location: &str) -> Result<String, ToolError> {
        self.locations.lock().push(location.to_string());
        Ok(self.report.clone())
    }
}

/// Schedule store stub serving a fixed JSON value.
pub struct StubScheduleStore {
    value: Value,
    /// Recorded patient ids.
    pub patients: Mutex<Vec<String>>,
}

impl StubScheduleStore {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            patients: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ScheduleStore for StubScheduleStore {
    async fn patient_schedule(&self, patient_id: &str) -> Result<Value, ToolError> {
        self.patients.lock().push(patient_id.to_string());
        Ok(self.value.clone())
    }
}
