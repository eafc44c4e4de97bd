//! Explicit session state machine.

use fabula_core::Summary;
use fabula_error::{FabulaResult, SessionError, SessionErrorKind};
use tracing::debug;

/// The phase a session is in.
///
/// Transitions are enforced by [`Session`]; every user-facing operation is
/// legal only from specific phases, which serializes generation turns and
/// eliminates races between overlapping clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Phase {
    /// No model initialized yet
    Idle,
    /// Model loaded; waiting for context summarization
    ModelReady,
    /// Summarizer request in flight
    SummaryPending,
    /// Summary drafted; awaiting accept/reject
    SummaryShown,
    /// Summary locked in; story may start
    SummaryAccepted,
    /// Story running; choices enabled
    StoryActive,
    /// A generation turn is in flight
    TurnInFlight,
}

/// Session state: the current phase plus the summary lifecycle.
///
/// # Examples
///
/// ```
/// use fabula_story::{Phase, Session};
///
/// let mut session = Session::new();
/// assert_eq!(session.phase(), Phase::Idle);
///
/// session.model_ready().unwrap();
/// // Starting before a summary is accepted is rejected.
/// assert!(session.start_story().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    summary: Option<Summary>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a session in the idle phase.
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            summary: None,
        }
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current summary, if one has been generated.
    pub fn summary(&self) -> Option<&Summary> {
        self.summary.as_ref()
    }

    fn illegal(&self, action: &str) -> SessionError {
        SessionError::new(SessionErrorKind::IllegalTransition {
            phase: self.phase().to_string(),
            action: action.to_string(),
        })
    }

    fn transition(&mut self, to: Phase) {
        debug!(from = %self.phase, to = %to, "session transition");
        self.phase = to;
    }

    /// Check that (re-)initializing a model is legal right now.
    pub fn check_initialize(&self) -> FabulaResult<()> {
        match self.phase() {
            Phase::Idle | Phase::ModelReady => Ok(()),
            _ => Err(self.illegal("initialize").into()),
        }
    }

    /// Record a successful model initialization.
    pub fn model_ready(&mut self) -> FabulaResult<()> {
        self.check_initialize()?;
        self.transition(Phase::ModelReady);
        Ok(())
    }

    /// Begin a summarization request.
    pub fn begin_summary(&mut self) -> FabulaResult<()> {
        match self.phase() {
            Phase::ModelReady => {
                self.transition(Phase::SummaryPending);
                Ok(())
            }
            Phase::Idle => Err(SessionError::new(SessionErrorKind::ModelNotReady).into()),
            _ => Err(self.illegal("summarize").into()),
        }
    }

    /// Record a drafted summary from the summarizer thread.
    pub fn summary_generated(&mut self, text: impl Into<String>) -> FabulaResult<()> {
        match self.phase() {
            Phase::SummaryPending => {
                self.summary = Some(Summary::draft(text));
                self.transition(Phase::SummaryShown);
                Ok(())
            }
            _ => Err(self.illegal("record summary").into()),
        }
    }

    /// Record a failed summarization; regeneration is re-enabled.
    pub fn summary_failed(&mut self) -> FabulaResult<()> {
        match self.phase() {
            Phase::SummaryPending => {
                self.transition(Phase::ModelReady);
                Ok(())
            }
            _ => Err(self.illegal("fail summary").into()),
        }
    }

    /// Lock the drafted summary in, unlocking story start.
    pub fn accept_summary(&mut self) -> FabulaResult<()> {
        match self.phase() {
            Phase::SummaryShown => {
                self.summary = self.summary.take().map(Summary::accept);
                self.transition(Phase::SummaryAccepted);
                Ok(())
            }
            _ => Err(self.illegal("accept summary").into()),
        }
    }

    /// Discard the drafted summary; regeneration is re-enabled.
    pub fn reject_summary(&mut self) -> FabulaResult<()> {
        match self.phase() {
            Phase::SummaryShown => {
                self.summary = None;
                self.transition(Phase::ModelReady);
                Ok(())
            }
            _ => Err(self.illegal("reject summary").into()),
        }
    }

    /// Start the story, returning the accepted summary text.
    ///
    /// Only legal once a summary has been accepted.
    pub fn start_story(&mut self) -> FabulaResult<String> {
        match (self.phase(), self.summary.as_ref()) {
            (Phase::SummaryAccepted, Some(summary)) if summary.is_accepted() => {
                let text = summary.text().to_string();
                self.transition(Phase::StoryActive);
                Ok(text)
            }
            (Phase::ModelReady | Phase::SummaryPending | Phase::SummaryShown, _) => {
                Err(SessionError::new(SessionErrorKind::SummaryNotAccepted).into())
            }
            _ => Err(self.illegal("start story").into()),
        }
    }

    /// Enter a generation turn.
    pub fn begin_turn(&mut self) -> FabulaResult<()> {
        match self.phase() {
            Phase::StoryActive => {
                self.transition(Phase::TurnInFlight);
                Ok(())
            }
            Phase::TurnInFlight => Err(SessionError::new(SessionErrorKind::TurnInFlight).into()),
            _ => Err(self.illegal("begin turn").into()),
        }
    }

    /// Leave a generation turn (normal completion or error fallback).
    pub fn end_turn(&mut self) -> FabulaResult<()> {
        match self.phase() {
            Phase::TurnInFlight => {
                self.transition(Phase::StoryActive);
                Ok(())
            }
            _ => Err(self.illegal("end turn").into()),
        }
    }
}
