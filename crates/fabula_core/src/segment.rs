//! Parsed narrative segments and choice sets.

use serde::{Deserialize, Serialize};

/// Number of choice controls presented after every story segment.
pub const CHOICE_COUNT: usize = 4;

/// Narrative text shown when a turn cannot be completed.
pub const FALLBACK_NARRATIVE: &str = "An error occurred while generating the story.";

/// Last-resort choice labels when model output is unusable.
const FALLBACK_CHOICES: [&str; CHOICE_COUNT] =
    ["Try again", "Restart", "Continue anyway", "Start over"];

/// Label shown on every control after a failed generation turn.
const RETRY_LABEL: &str = "Try again";

/// The result of splitting raw model output into narrative and choices.
///
/// Transient: recomputed on every render tick from the current buffer and
/// never persisted. `choices` holds at most [`CHOICE_COUNT`] entries in model
/// order; reconciliation into a full [`ChoiceSet`] happens separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSegment {
    /// Narrative prose preceding the choices marker
    pub narrative: String,
    /// Extracted choice labels, in order, at most four
    pub choices: Vec<String>,
}

impl ParsedSegment {
    /// The last-resort segment: fallback narrative plus the fixed recovery
    /// choice labels.
    ///
    /// # Examples
    ///
    /// ```
    /// use fabula_core::ParsedSegment;
    ///
    /// let fallback = ParsedSegment::fallback();
    /// assert_eq!(fallback.choices.len(), 4);
    /// assert_eq!(fallback.choices[0], "Try again");
    /// ```
    pub fn fallback() -> Self {
        Self {
            narrative: FALLBACK_NARRATIVE.to_string(),
            choices: FALLBACK_CHOICES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Exactly four ordered choice labels.
///
/// Invariant: always [`CHOICE_COUNT`] entries and never a blank entry — a
/// blank slot is replaced by its positional placeholder at construction.
///
/// # Examples
///
/// ```
/// use fabula_core::ChoiceSet;
///
/// let set = ChoiceSet::new([
///     "Order a drink".to_string(),
///     "Eavesdrop".to_string(),
///     "".to_string(),
///     "Pick a fight".to_string(),
/// ]);
/// assert_eq!(set.get(2), Some("Choice 3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSet([String; CHOICE_COUNT]);

impl ChoiceSet {
    /// Build a choice set, replacing blank entries with placeholders.
    pub fn new(labels: [String; CHOICE_COUNT]) -> Self {
        let mut filled = labels;
        for (index, label) in filled.iter_mut().enumerate() {
            if label.trim().is_empty() {
                *label = Self::placeholder(index + 1);
            }
        }
        Self(filled)
    }

    /// The synthesized label for a missing or blank slot, 1-based.
    pub fn placeholder(position: usize) -> String {
        format!("Choice {position}")
    }

    /// The uniform recovery set shown after a failed generation turn.
    pub fn retry() -> Self {
        Self(std::array::from_fn(|_| RETRY_LABEL.to_string()))
    }

    /// The label at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(|s| s.as_str())
    }

    /// All four labels in order.
    pub fn labels(&self) -> &[String; CHOICE_COUNT] {
        &self.0
    }

    /// Iterate over the labels in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|s| s.as_str())
    }
}

impl Default for ChoiceSet {
    fn default() -> Self {
        Self(std::array::from_fn(|i| Self::placeholder(i + 1)))
    }
}
