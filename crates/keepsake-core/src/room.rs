//! Trait seam for the external real-time room platform.

use crate::error::AgentError;
use async_trait::async_trait;
use std::collections::HashMap;

/// Participant attribute carrying the application user id.
pub const USER_ID_ATTRIBUTE: &str = "myUserID";

/// Media subscription behavior requested at connect time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoSubscribe {
    /// Subscribe to all published tracks.
    All,
    /// Subscribe to audio tracks only.
    AudioOnly,
    /// Subscribe to nothing.
    None,
}

/// Raw participant data supplied by the room platform.
#[derive(Debug, Clone, Default)]
pub struct ParticipantInfo {
    /// Platform identity string.
    pub identity: String,
    /// Optional display name.
    pub name: Option<String>,
    /// Loosely-typed attribute bag published by the client.
    pub attributes: HashMap<String, String>,
}

/// Connection to one conversation room.
#[async_trait]
pub trait RoomConnection: Send + Sync {
    /// Room name for logging and memory scoping.
    fn name(&self) -> &str;

    /// Connect with the requested subscription behavior.
    async fn connect(&self, subscribe: AutoSubscribe) -> Result<(), AgentError>;

    /// Wait until a participant has joined and return their data.
    async fn wait_for_participant(&self) -> Result<ParticipantInfo, AgentError>;
}

/// Typed, validated participant profile read once at the session boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantProfile {
    /// Application user id from the participant attributes.
    pub user_id: String,
    /// Human-facing name, falling back to the platform identity.
    pub display_name: String,
}

impl ParticipantProfile {
    /// Validate raw participant data into a typed profile.
    pub fn from_info(info: &ParticipantInfo) -> Result<Self, AgentError> {
        let user_id = info
            .attributes
            .get(USER_ID_ATTRIBUTE)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AgentError::MissingAttribute(USER_ID_ATTRIBUTE.to_string()))?;
        let display_name = info
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&info.identity)
            .to_string();
        Ok(Self {
            user_id: user_id.to_string(),
            display_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{ParticipantInfo, ParticipantProfile, USER_ID_ATTRIBUTE};
    use crate::error::AgentError;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn info_with_user(user_id: &str) -> ParticipantInfo {
        ParticipantInfo {
            identity: "participant-1".to_string(),
            name: Some("Margaret".to_string()),
            attributes: HashMap::from([(USER_ID_ATTRIBUTE.to_string(), user_id.to_string())]),
        }
    }

    #[test]
    fn profile_reads_user_id_and_name() {
        let profile = ParticipantProfile::from_info(&info_with_user("u1")).expect("profile");
        assert_eq!(
            profile,
            ParticipantProfile {
                user_id: "u1".to_string(),
                display_name: "Margaret".to_string(),
            }
        );
    }

    #[test]
    fn profile_falls_back_to_identity_without_name() {
        let mut info = info_with_user("u1");
        info.name = None;
        let profile = ParticipantProfile::from_info(&info).expect("profile");
        assert_eq!(profile.display_name, "participant-1".to_string());
    }

    #[test]
    fn profile_rejects_missing_user_attribute() {
        let info = ParticipantInfo {
            identity: "participant-1".to_string(),
            name: None,
            attributes: HashMap::new(),
        };
        let err = ParticipantProfile::from_info(&info).expect_err("missing");
        match err {
            AgentError::MissingAttribute(name) => {
                assert_eq!(name, USER_ID_ATTRIBUTE.to_string());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn profile_rejects_blank_user_attribute() {
        let err = ParticipantProfile::from_info(&info_with_user("  ")).expect_err("blank");
        assert!(matches!(err, AgentError::MissingAttribute(_)));
    }
}
