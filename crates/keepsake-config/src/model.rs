//! Configuration schema for keepsake.

use serde::{Deserialize, Serialize};

/// Root config for the keepsake service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeepsakeConfig {
    #[serde(default)]
    pub livekit: LiveKitConfig,
    #[serde(default)]
    pub memory: MemoryServiceConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

impl KeepsakeConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> KeepsakeConfigBuilder {
        KeepsakeConfigBuilder::new()
    }
}

/// Builder for assembling a `KeepsakeConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct KeepsakeConfigBuilder {
    config: KeepsakeConfig,
}

impl KeepsakeConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: KeepsakeConfig::default(),
        }
    }

    /// Replace the LiveKit connection configuration.
    pub fn livekit(mut self, livekit: LiveKitConfig) -> Self {
        self.config.livekit = livekit;
        self
    }

    /// Replace the memory service configuration.
    pub fn memory(mut self, memory: MemoryServiceConfig) -> Self {
        self.config.memory = memory;
        self
    }

    /// Replace the application database configuration.
    pub fn database(mut self, database: DatabaseConfig) -> Self {
        self.config.database = database;
        self
    }

    /// Replace the weather endpoint configuration.
    pub fn weather(mut self, weather: WeatherConfig) -> Self {
        self.config.weather = weather;
        self
    }

    /// Replace the agent persona configuration.
    pub fn agent(mut self, agent: AgentConfig) -> Self {
        self.config.agent = agent;
        self
    }

    /// Replace the voice pipeline configuration.
    pub fn pipeline(mut self, pipeline: PipelineConfig) -> Self {
        self.config.pipeline = pipeline;
        self
    }

    /// Replace the HTTP server configuration.
    pub fn http(mut self, http: HttpConfig) -> Self {
        self.config.http = http;
        self
    }

    /// Finalize and return the built `KeepsakeConfig`.
    pub fn build(self) -> KeepsakeConfig {
        self.config
    }
}

/// LiveKit connection and signing credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveKitConfig {
    #[serde(default = "default_livekit_url")]
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: String,
}

impl Default for LiveKitConfig {
    fn default() -> Self {
        Self {
            url: default_livekit_url(),
            api_key: String::new(),
            api_secret: String::new(),
        }
    }
}

/// Default LiveKit signaling URL for local development.
fn default_livekit_url() -> String {
    "http://localhost:7880".to_string()
}

/// Hosted memory service credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryServiceConfig {
    #[serde(default = "default_memory_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
}

impl Default for MemoryServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_memory_base_url(),
            api_key: String::new(),
        }
    }
}

/// Default base URL for the hosted Mem0 API.
fn default_memory_base_url() -> String {
    "https://api.mem0.ai".to_string()
}

/// Application database (Convex deployment) access.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    /// Static service credential passed with every schedule query.
    #[serde(default)]
    pub query_key: String,
}

/// Weather endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    #[serde(default = "default_weather_format")]
    pub format: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            format: default_weather_format(),
        }
    }
}

/// Default weather endpoint base URL.
fn default_weather_base_url() -> String {
    "https://wttr.in".to_string()
}

/// Default weather format string (condition + temperature).
fn default_weather_format() -> String {
    "%C+%t".to_string()
}

/// Agent persona and session boundary settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Display name used when accepting a job request.
    #[serde(default = "default_agent_name")]
    pub agent_name: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            system_prompt: default_system_prompt(),
            greeting: default_greeting(),
            agent_name: default_agent_name(),
        }
    }
}

/// Default system prompt for the voice companion.
fn default_system_prompt() -> String {
    "You are a voice assistant designed to help patients with dementia go on \
     with their daily lives. Your interface with users will be voice, so you \
     should only respond with words and not with any other characters such \
     as *, #, etc."
        .to_string()
}

/// Default greeting spoken when the assistant joins a room.
fn default_greeting() -> String {
    "Hey, how can I help you today?".to_string()
}

/// Default agent display name.
fn default_agent_name() -> String {
    "Dementia_Bot".to_string()
}

/// Voice pipeline turn-endpointing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
    #[serde(default = "default_min_endpointing_delay")]
    pub min_endpointing_delay: f32,
    #[serde(default = "default_max_endpointing_delay")]
    pub max_endpointing_delay: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_endpointing_delay: default_min_endpointing_delay(),
            max_endpointing_delay: default_max_endpointing_delay(),
        }
    }
}

/// Default minimum turn-endpointing delay in seconds.
fn default_min_endpointing_delay() -> f32 {
    0.5
}

/// Default maximum turn-endpointing delay in seconds.
fn default_max_endpointing_delay() -> f32 {
    5.0
}

/// HTTP server bind settings for the token endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_http_addr")]
    pub bind_addr: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_http_addr(),
        }
    }
}

/// Default bind address for the token endpoint.
fn default_http_addr() -> String {
    "0.0.0.0:5000".to_string()
}
