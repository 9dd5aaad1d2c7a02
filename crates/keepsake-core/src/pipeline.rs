//! Trait seams for the external voice pipeline.

use crate::context::ChatContext;
use crate::error::AgentError;
use crate::metrics::MetricsSink;
use async_trait::async_trait;
use keepsake_config::PipelineConfig;
use keepsake_tools::{ToolContext, ToolRegistry};
use std::sync::Arc;

/// Hook invoked immediately before each inference turn.
#[async_trait]
pub trait TurnHook: Send + Sync {
    /// Mutate the conversation context before it is sent to inference.
    async fn before_inference(&self, context: &mut ChatContext) -> Result<(), AgentError>;
}

/// Everything a voice pipeline needs to run a session.
pub struct PipelineStart {
    /// Initial conversation context (system prompt already applied).
    pub context: ChatContext,
    /// Pre-turn hook run before every inference call.
    pub hook: Arc<dyn TurnHook>,
    /// Tools the inference step may invoke mid-turn.
    pub tools: ToolRegistry,
    /// Tool context bound to the session's participant.
    pub tool_context: ToolContext,
    /// Turn-endpointing options.
    pub options: PipelineConfig,
    /// Optional sink for pipeline usage metrics.
    pub metrics: Option<Arc<dyn MetricsSink>>,
}

/// Interface to the hosted speech/LLM pipeline.
///
/// Transport, STT/TTS, turn detection, and inference all live behind this
/// seam; this crate only sequences and feeds it.
#[async_trait]
pub trait VoicePipeline: Send + Sync {
    /// Start the pipeline for a connected room participant.
    async fn start(&self, start: PipelineStart) -> Result<(), AgentError>;

    /// Speak an utterance through the pipeline.
    async fn say(&self, text: &str, allow_interruptions: bool) -> Result<(), AgentError>;
}
