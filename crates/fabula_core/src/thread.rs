//! Append-only conversation threads.

use crate::{Message, Role};
use serde::{Deserialize, Serialize};

/// An ordered, append-only log of role-tagged messages.
///
/// A thread is the model's conversational context: insertion order is
/// significant and messages are never removed or rewritten during a session.
/// The engine owns two independent threads (main story and summarizer) that
/// never share messages.
///
/// # Examples
///
/// ```
/// use fabula_core::{ConversationThread, Role};
///
/// let mut thread = ConversationThread::seeded("You are a game master.");
/// thread.push_user("Begin the adventure");
/// thread.push_assistant("You wake in a forest clearing.");
///
/// assert_eq!(thread.len(), 3);
/// assert_eq!(thread.messages()[0].role, Role::System);
/// assert_eq!(thread.messages()[2].role, Role::Assistant);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationThread {
    messages: Vec<Message>,
}

impl ConversationThread {
    /// Create an empty thread.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a thread seeded with a system message.
    pub fn seeded(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
        }
    }

    /// Append a message to the thread.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Append a user message.
    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Message::user(content));
    }

    /// Append an assistant message.
    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Message::assistant(content));
    }

    /// The messages in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recently appended message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages in the thread.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the thread holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
