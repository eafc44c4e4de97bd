//! Request types for model generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// A generation request: the conversation so far plus sampling knobs.
///
/// # Examples
///
/// ```
/// use fabula_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Continue the story")])
///     .model(Some("Llama-3-8B-Instruct-q4f32_1-MLC-1k".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages.len(), 1);
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder,
)]
#[builder(default)]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Model identifier to use
    pub model: Option<String>,
    /// Sampling temperature override
    pub temperature: Option<f32>,
    /// Nucleus-sampling threshold override
    pub top_p: Option<f32>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}
