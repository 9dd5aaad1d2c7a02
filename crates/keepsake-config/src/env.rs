//! Environment-variable loader for `KeepsakeConfig`.
//!
//! Reads the configuration surface from process environment variables with
//! validation, keeping every external credential a named, typed field.

use crate::error::ConfigError;
use crate::model::KeepsakeConfig;
use log::debug;

/// LiveKit signaling URL.
const ENV_LIVEKIT_URL: &str = "LIVEKIT_URL";
/// LiveKit API key used as the token issuer.
const ENV_LIVEKIT_API_KEY: &str = "LIVEKIT_API_KEY";
/// LiveKit API secret used for token signing.
const ENV_LIVEKIT_API_SECRET: &str = "LIVEKIT_API_SECRET";
/// Hosted memory service API key.
const ENV_MEM0_API_KEY: &str = "MEM0_API_KEY";
/// Optional override for the memory service base URL.
const ENV_MEM0_BASE_URL: &str = "MEM0_BASE_URL";
/// Convex deployment URL.
const ENV_CONVEX_URL: &str = "CONVEX_URL";
/// Static credential for the schedule query.
const ENV_CONVEX_QUERY_KEY: &str = "CONVEX_QUERY_KEY";
/// Optional override for the weather endpoint base URL.
const ENV_WEATHER_BASE_URL: &str = "WEATHER_BASE_URL";
/// Optional override for the token endpoint bind address.
const ENV_HTTP_ADDR: &str = "KEEPSAKE_HTTP_ADDR";

impl KeepsakeConfig {
    /// Load and validate config from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load config through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = KeepsakeConfig::default();

        if let Some(url) = optional(&lookup, ENV_LIVEKIT_URL) {
            config.livekit.url = url;
        }
        config.livekit.api_key = required(&lookup, ENV_LIVEKIT_API_KEY)?;
        config.livekit.api_secret = required(&lookup, ENV_LIVEKIT_API_SECRET)?;

        config.memory.api_key = required(&lookup, ENV_MEM0_API_KEY)?;
        if let Some(base_url) = optional(&lookup, ENV_MEM0_BASE_URL) {
            config.memory.base_url = base_url;
        }

        config.database.url = required(&lookup, ENV_CONVEX_URL)?;
        config.database.query_key = required(&lookup, ENV_CONVEX_QUERY_KEY)?;

        if let Some(base_url) = optional(&lookup, ENV_WEATHER_BASE_URL) {
            config.weather.base_url = base_url;
        }
        if let Some(addr) = optional(&lookup, ENV_HTTP_ADDR) {
            config.http.bind_addr = addr;
        }

        config.validate()?;
        debug!(
            "loaded config from environment (livekit_url={}, memory_base={})",
            config.livekit.url, config.memory.base_url
        );
        Ok(config)
    }

    /// Validate field-level constraints across all sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pipeline.min_endpointing_delay > self.pipeline.max_endpointing_delay {
            return Err(ConfigError::InvalidField {
                path: "pipeline.min_endpointing_delay".to_string(),
                message: "must not exceed max_endpointing_delay".to_string(),
            });
        }
        if self.pipeline.min_endpointing_delay < 0.0 {
            return Err(ConfigError::InvalidField {
                path: "pipeline.min_endpointing_delay".to_string(),
                message: "must be non-negative".to_string(),
            });
        }
        if self.weather.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                path: "weather.base_url".to_string(),
                message: "must not be blank".to_string(),
            });
        }
        Ok(())
    }
}

/// Read a required variable, rejecting blank values.
fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match optional(lookup, name) {
        Some(value) => Ok(value),
        None => Err(ConfigError::MissingVar(name.to_string())),
    }
}

/// Read an optional variable, treating blank values as absent.
fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PipelineConfig;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("LIVEKIT_API_KEY", "lk-key"),
            ("LIVEKIT_API_SECRET", "lk-secret"),
            ("MEM0_API_KEY", "mem0-key"),
            ("CONVEX_URL", "https://db.example.convex.cloud"),
            ("CONVEX_QUERY_KEY", "query-key"),
        ])
    }

    fn lookup_in(
        vars: HashMap<&'static str, &'static str>,
    ) -> impl Fn(&str) -> Option<String> {
        move |name| vars.get(name).map(|value| value.to_string())
    }

    #[test]
    fn from_lookup_applies_required_and_defaults() {
        let config = KeepsakeConfig::from_lookup(lookup_in(base_vars())).expect("config");
        assert_eq!(config.livekit.api_key, "lk-key".to_string());
        assert_eq!(config.livekit.url, "http://localhost:7880".to_string());
        assert_eq!(config.memory.api_key, "mem0-key".to_string());
        assert_eq!(
            config.database.url,
            "https://db.example.convex.cloud".to_string()
        );
        assert_eq!(config.weather.base_url, "https://wttr.in".to_string());
    }

    #[test]
    fn from_lookup_rejects_missing_credentials() {
        let mut vars = base_vars();
        vars.remove("MEM0_API_KEY");
        let err = KeepsakeConfig::from_lookup(lookup_in(vars)).expect_err("missing");
        match err {
            ConfigError::MissingVar(name) => assert_eq!(name, "MEM0_API_KEY".to_string()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_lookup_treats_blank_as_missing() {
        let mut vars = base_vars();
        vars.insert("LIVEKIT_API_SECRET", "   ");
        let err = KeepsakeConfig::from_lookup(lookup_in(vars)).expect_err("blank");
        match err {
            ConfigError::MissingVar(name) => {
                assert_eq!(name, "LIVEKIT_API_SECRET".to_string());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_inverted_endpointing_delays() {
        let config = KeepsakeConfig::builder()
            .pipeline(PipelineConfig {
                min_endpointing_delay: 6.0,
                max_endpointing_delay: 5.0,
            })
            .build();
        let err = config.validate().expect_err("invalid");
        match err {
            ConfigError::InvalidField { path, .. } => {
                assert_eq!(path, "pipeline.min_endpointing_delay".to_string());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
