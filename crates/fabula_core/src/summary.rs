//! Context summary lifecycle.

use serde::{Deserialize, Serialize};

/// A condensed restatement of user-supplied story context.
///
/// Lifecycle: absent until generated, held as a draft while the player
/// decides, cleared on rejection, and locked read-only on acceptance. An
/// accepted summary gates whether the main story may start and seeds the
/// opening prompt.
///
/// # Examples
///
/// ```
/// use fabula_core::Summary;
///
/// let draft = Summary::draft("A heist in a rain-soaked city.");
/// assert!(!draft.is_accepted());
///
/// let accepted = draft.accept();
/// assert!(accepted.is_accepted());
/// assert_eq!(accepted.text(), "A heist in a rain-soaked city.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Summary {
    /// Generated but not yet accepted or rejected
    Draft(String),
    /// Accepted and locked read-only
    Accepted(String),
}

impl Summary {
    /// Create a draft summary from generated text.
    pub fn draft(text: impl Into<String>) -> Self {
        Self::Draft(text.into())
    }

    /// The summary text.
    pub fn text(&self) -> &str {
        match self {
            Self::Draft(text) | Self::Accepted(text) => text,
        }
    }

    /// Whether the summary has been accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// Lock the summary in as accepted.
    pub fn accept(self) -> Self {
        match self {
            Self::Draft(text) | Self::Accepted(text) => Self::Accepted(text),
        }
    }
}
