//! Ordered conversation context for a session.

use crate::error::AgentError;
use keepsake_protocol::{Message, Role};

/// Ordered sequence of role-tagged messages for one conversation.
///
/// Order is turn order and is semantically meaningful; splices happen only
/// through [`ChatContext::insert_before`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatContext {
    messages: Vec<Message>,
}

impl ChatContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context seeded with a system prompt.
    pub fn with_system(prompt: impl Into<String>) -> Self {
        let mut context = Self::new();
        context.append(Role::System, prompt);
        context
    }

    /// Append a message with the given role.
    pub fn append(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
    }

    /// Append an already-built message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Return the newest message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages in the context.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the context holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// All messages in turn order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Insert a message immediately before the given index.
    ///
    /// An index equal to `len` appends; anything larger is an error.
    pub fn insert_before(&mut self, index: usize, message: Message) -> Result<(), AgentError> {
        if index > self.messages.len() {
            return Err(AgentError::ContextIndex(index));
        }
        self.messages.insert(index, message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ChatContext;
    use crate::error::AgentError;
    use keepsake_protocol::{Message, Role};
    use pretty_assertions::assert_eq;

    #[test]
    fn with_system_seeds_first_message() {
        let context = ChatContext::with_system("be kind");
        assert_eq!(context.messages(), &[Message::system("be kind")]);
    }

    #[test]
    fn append_preserves_turn_order() {
        let mut context = ChatContext::new();
        context.append(Role::User, "first");
        context.append(Role::Assistant, "second");
        assert_eq!(context.len(), 2);
        assert_eq!(context.last(), Some(&Message::assistant("second")));
    }

    #[test]
    fn insert_before_splices_at_index() {
        let mut context = ChatContext::new();
        context.append(Role::User, "M");
        context
            .insert_before(0, Message::assistant("note"))
            .expect("insert");
        assert_eq!(
            context.messages(),
            &[Message::assistant("note"), Message::user("M")]
        );
    }

    #[test]
    fn insert_before_rejects_out_of_range_index() {
        let mut context = ChatContext::new();
        context.append(Role::User, "M");
        let err = context
            .insert_before(2, Message::assistant("note"))
            .expect_err("out of range");
        match err {
            AgentError::ContextIndex(index) => assert_eq!(index, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
