//! Message types for conversation history.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A role-tagged text message in a conversation thread.
///
/// Immutable once created. Ordering within a [`crate::ConversationThread`]
/// is significant.
///
/// # Examples
///
/// ```
/// use fabula_core::{Message, Role};
///
/// let message = Message::user("Search the room");
/// assert_eq!(message.role, Role::User);
/// assert_eq!(message.content, "Search the room");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content.into())
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content.into())
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content.into())
    }
}
