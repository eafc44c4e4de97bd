//! Trait definitions for the Fabula story engine.
//!
//! This crate defines the seams between the engine and its collaborators:
//! the streaming completion driver, the model lifecycle provider, and the
//! presentation sink that renders story text and choice controls.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod sink;
mod traits;
mod types;

pub use sink::PresentationSink;
pub use traits::{ModelLifecycle, StoryDriver, Streaming, StoryStream};
pub use types::{FinishReason, InitProgress, Region, StreamChunk};
