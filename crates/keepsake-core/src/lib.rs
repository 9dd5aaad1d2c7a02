//! Core session primitives for keepsake.
//!
//! This crate owns the conversation context, the memory enrichment hook,
//! the session entry point, and the trait seams for the external room and
//! voice pipeline collaborators.

pub mod context;
pub mod enrich;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod room;
pub mod session;

pub use context::ChatContext;
pub use enrich::MemoryEnricher;
pub use error::AgentError;
pub use metrics::{MetricsSink, UsageCollector, UsageMetrics};
pub use pipeline::{PipelineStart, TurnHook, VoicePipeline};
pub use room::{
    AutoSubscribe, ParticipantInfo, ParticipantProfile, RoomConnection, USER_ID_ATTRIBUTE,
};
pub use session::{AcceptOptions, SessionDeps, SessionReport, accept_options, run_session};
