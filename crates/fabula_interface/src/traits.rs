//! Trait definitions for completion drivers and model lifecycle providers.

use crate::{InitProgress, StreamChunk};
use async_trait::async_trait;
use fabula_core::{GenerateRequest, SamplingConfig};
use fabula_error::FabulaResult;
use futures_util::stream::Stream;
use std::pin::Pin;

/// A pinned, boxed stream of completion deltas for one generation turn.
///
/// Lazy, finite, and non-restartable: once consumed it cannot be replayed.
pub type StoryStream = Pin<Box<dyn Stream<Item = FabulaResult<StreamChunk>> + Send>>;

/// Core trait that all completion drivers must implement.
///
/// This provides the minimal interface for non-streaming text generation,
/// used by the summarizer thread. Streaming is exposed through the
/// [`Streaming`] capability trait.
#[async_trait]
pub trait StoryDriver: Send + Sync {
    /// Generate the complete reply for the given conversation.
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<String>;

    /// Provider name (e.g., "webllm", "ollama").
    fn provider_name(&self) -> &'static str;

    /// Model identifier currently loaded.
    fn model_name(&self) -> &str;
}

/// Trait for drivers that support streaming responses.
#[async_trait]
pub trait Streaming: StoryDriver {
    /// Generate a streaming response.
    ///
    /// Returns a stream that yields deltas as they arrive from the model.
    /// Deltas are incremental suffixes; callers reconstruct the cumulative
    /// text themselves.
    async fn generate_stream(&self, req: &GenerateRequest) -> FabulaResult<StoryStream>;
}

/// Trait for providers that manage local model download and initialization.
#[async_trait]
pub trait ModelLifecycle: Send + Sync {
    /// Initialize (downloading if necessary) the given model with the given
    /// sampling parameters, reporting progress through `on_progress`.
    async fn initialize(
        &self,
        model_id: &str,
        sampling: &SamplingConfig,
        on_progress: &mut (dyn FnMut(InitProgress) + Send),
    ) -> FabulaResult<()>;

    /// Registry of model identifiers available for selection UI.
    fn available_models(&self) -> Vec<String>;
}
