//! Session error types.

/// Specific error conditions for session state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum SessionErrorKind {
    /// Action attempted from a phase where it is not legal
    #[display("Action '{}' is not legal from phase '{}'", action, phase)]
    IllegalTransition {
        /// The phase the session was in
        phase: String,
        /// The action that was attempted
        action: String,
    },
    /// Story start attempted without an accepted summary
    #[display("Cannot start the story before a context summary is accepted")]
    SummaryNotAccepted,
    /// A second generation turn was requested while one is in flight
    #[display("A generation turn is already in flight")]
    TurnInFlight,
    /// Summarization requested with empty context text
    #[display("Context text is empty; nothing to summarize")]
    EmptyContext,
    /// The model has not been initialized yet
    #[display("Model is not initialized")]
    ModelNotReady,
    /// A choice index outside 0..4 was selected
    #[display("Choice index {} is out of range", _0)]
    ChoiceOutOfRange(usize),
}

/// Error type for session operations.
///
/// # Examples
///
/// ```
/// use fabula_error::{SessionError, SessionErrorKind};
///
/// let err = SessionError::new(SessionErrorKind::SummaryNotAccepted);
/// assert!(format!("{}", err).contains("summary"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Session Error: {} at line {} in {}", kind, line, file)]
pub struct SessionError {
    /// The specific error condition
    pub kind: SessionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl SessionError {
    /// Create a new SessionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SessionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
