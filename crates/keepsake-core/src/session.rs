//! Session entry point: start-up sequencing for one conversation.

use crate::context::ChatContext;
use crate::enrich::MemoryEnricher;
use crate::error::AgentError;
use crate::metrics::UsageCollector;
use crate::pipeline::{PipelineStart, VoicePipeline};
use crate::room::{AutoSubscribe, ParticipantProfile, RoomConnection};
use keepsake_config::{AgentConfig, KeepsakeConfig};
use keepsake_memory::MemoryStore;
use keepsake_tools::{
    ScheduleStore, ToolContext, TurnServices, WeatherProvider, builtin_tool_registry,
};
use log::info;
use std::sync::Arc;
use uuid::Uuid;

/// External collaborators injected into a session run.
pub struct SessionDeps {
    /// Long-term memory service.
    pub memory: Arc<dyn MemoryStore>,
    /// Weather provider for the weather tool.
    pub weather: Arc<dyn WeatherProvider>,
    /// Schedule store for the schedule tool.
    pub schedule: Arc<dyn ScheduleStore>,
}

/// Handle returned once a session is running.
#[derive(Debug)]
pub struct SessionReport {
    /// Validated participant profile the session is bound to.
    pub participant: ParticipantProfile,
    /// Usage totals accumulated by the pipeline.
    pub usage: Arc<UsageCollector>,
}

/// Connect, wait for a participant, and start the voice pipeline.
///
/// Pure sequencing: connect (audio only), read the participant once, bind
/// the memory hook and tools to their user id, start the pipeline, speak the
/// greeting.
pub async fn run_session(
    room: Arc<dyn RoomConnection>,
    pipeline: Arc<dyn VoicePipeline>,
    deps: SessionDeps,
    config: &KeepsakeConfig,
) -> Result<SessionReport, AgentError> {
    let context = ChatContext::with_system(&config.agent.system_prompt);

    info!("connecting to room (name={})", room.name());
    room.connect(AutoSubscribe::AudioOnly).await?;

    let participant = room.wait_for_participant().await?;
    let profile = ParticipantProfile::from_info(&participant)?;
    info!(
        "starting voice assistant (identity={}, user_id={})",
        participant.identity, profile.user_id
    );

    let hook = Arc::new(MemoryEnricher::new(
        deps.memory.clone(),
        profile.user_id.clone(),
    ));
    let tools = builtin_tool_registry();
    let tool_context = ToolContext {
        session_id: Uuid::new_v4(),
        user_id: profile.user_id.clone(),
        services: Arc::new(TurnServices {
            weather: Some(deps.weather.clone()),
            schedule: Some(deps.schedule.clone()),
        }),
    };
    let usage = Arc::new(UsageCollector::new());

    pipeline
        .start(PipelineStart {
            context,
            hook,
            tools,
            tool_context,
            options: config.pipeline.clone(),
            metrics: Some(usage.clone()),
        })
        .await?;

    pipeline.say(&config.agent.greeting, true).await?;

    Ok(SessionReport {
        participant: profile,
        usage,
    })
}

/// Options used when accepting an incoming agent job request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptOptions {
    /// Display name for the agent in the room.
    pub name: String,
    /// Unique identity for the agent in this room.
    pub identity: String,
}

/// Build acceptance options for a job request.
pub fn accept_options(job_id: &str, agent: &AgentConfig) -> AcceptOptions {
    AcceptOptions {
        name: agent.agent_name.clone(),
        identity: format!("agent-assistant-{job_id}"),
    }
}
