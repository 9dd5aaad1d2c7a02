//! Shared types for keepsake conversations and tools.

mod message;
mod tool;

pub use message::{Message, Role};
pub use tool::ToolError;

use uuid::Uuid;

/// Unique identifier for a session.
pub type SessionId = Uuid;
