//! Core type definitions for the Fabula interface.

use serde::{Deserialize, Serialize};

/// A single delta from a streaming completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamChunk {
    /// Incremental text content (a suffix of the growing reply).
    pub content: String,
    /// Whether this is the final chunk of the turn.
    pub is_final: bool,
    /// Optional finish reason if final.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<FinishReason>,
}

impl StreamChunk {
    /// A non-final delta carrying `content`.
    pub fn delta(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_final: false,
            finish_reason: None,
        }
    }

    /// The terminating chunk of a stream.
    pub fn final_chunk(reason: FinishReason) -> Self {
        Self {
            content: String::new(),
            is_final: true,
            finish_reason: Some(reason),
        }
    }
}

/// Why generation stopped.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum FinishReason {
    /// Model completed naturally.
    Stop,
    /// Hit a token limit.
    Length,
    /// Hit a stop sequence.
    StopSequence,
    /// Content was filtered.
    ContentFilter,
    /// Other/unknown reason.
    Other,
}

/// A progress report from model initialization/download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitProgress {
    /// Completion fraction in `[0.0, 1.0]`.
    pub progress: f32,
    /// Human-readable progress text for the status region.
    pub text: String,
}

/// Named UI regions the presentation sink can show or hide.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Region {
    /// Model download/initialization status area
    Status,
    /// Context entry and summary review area
    Summary,
    /// Genre selection area
    Genre,
    /// Story log and choice controls
    Story,
}
