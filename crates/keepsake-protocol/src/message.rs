//! Conversation message model shared across the session pipeline.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Message stored in a conversation context.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Role that produced the message.
    pub role: Role,
    /// Message content.
    pub content: String,
}

impl Message {
    /// Build a message with an explicit role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Build a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Build a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Build an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Speaker role for a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System-generated message.
    System,
    /// User-authored message.
    User,
    /// Assistant-authored message.
    Assistant,
    /// Tool-produced message.
    Tool,
}

impl Role {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
        }
    }

    /// Parse a role from a lowercase string, defaulting to user.
    pub fn parse(value: &str) -> Self {
        match value {
            "system" => Role::System,
            "assistant" => Role::Assistant,
            "tool" => Role::Tool,
            _ => Role::User,
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Role::parse(value))
    }
}

#[cfg(test)]
mod tests {
    use super::{Message, Role};
    use pretty_assertions::assert_eq;

    #[test]
    fn role_parses_and_formats() {
        assert_eq!(Role::parse("system"), Role::System);
        assert_eq!(Role::parse("assistant"), Role::Assistant);
        assert_eq!(Role::parse("tool"), Role::Tool);
        assert_eq!(Role::parse("anything-else"), Role::User);
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }

    #[test]
    fn message_constructors_set_roles() {
        assert_eq!(
            Message::user("hello"),
            Message {
                role: Role::User,
                content: "hello".to_string(),
            }
        );
        assert_eq!(Message::system("rules").role, Role::System);
        assert_eq!(Message::assistant("hi").role, Role::Assistant);
    }
}
