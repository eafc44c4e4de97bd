//! The two conversation threads backing a session.

use fabula_core::ConversationThread;

/// The model context owned by one session.
///
/// Two independent threads that never share messages: the main story thread
/// (seeded with the game-master system prompt) and the summarizer thread.
/// Both grow only in strict request/response pairs appended in order; neither
/// is truncated, even after a failed turn.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ConversationState {
    /// Main narrative context
    story: ConversationThread,
    /// Context-summarization thread
    summarizer: ConversationThread,
}

impl ConversationState {
    /// Create the thread pair, seeding the story thread with the system
    /// prompt.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            story: ConversationThread::seeded(system_prompt),
            summarizer: ConversationThread::new(),
        }
    }

    /// Mutable access to the story thread.
    pub fn story_mut(&mut self) -> &mut ConversationThread {
        &mut self.story
    }

    /// Mutable access to the summarizer thread.
    pub fn summarizer_mut(&mut self) -> &mut ConversationThread {
        &mut self.summarizer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabula_core::Role;

    #[test]
    fn threads_are_independent() {
        let mut state = ConversationState::new("game master rules");
        state.story_mut().push_user("Begin");
        state.summarizer_mut().push_user("Summarize this");

        assert_eq!(state.story().len(), 2);
        assert_eq!(state.summarizer().len(), 1);
        assert_eq!(state.story().messages()[0].role, Role::System);
        assert_eq!(state.summarizer().messages()[0].role, Role::User);
    }
}
