//! Streaming narrative engine for Fabula.
//!
//! This crate drives a branching-RPG story session against a locally-run
//! language model. The model's replies are free-form text ending in a
//! `CHOICES:` enumeration; the engine renders prose incrementally as deltas
//! arrive, extracts exactly four choices from the finalized reply however
//! malformed, and keeps the presentation sink consistent at every
//! intermediate step and on error.
//!
//! # Example
//!
//! ```rust,ignore
//! use fabula_story::{StoryConfig, StoryOrchestrator};
//!
//! # async fn example(driver: impl Driver, sink: impl Sink) -> fabula_error::FabulaResult<()> {
//! let mut game = StoryOrchestrator::new(driver, sink, StoryConfig::default());
//!
//! game.initialize_model(None).await?;
//! game.summarize_context("Three siblings inherit a lighthouse.").await?;
//! game.accept_summary()?;
//! game.start_story(Some("mystery")).await?;
//! game.choose(0).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod choices;
mod config;
mod conversation;
mod orchestrator;
mod parser;
pub mod prompts;
mod renderer;
mod session;

pub use choices::reconcile;
pub use config::StoryConfig;
pub use conversation::ConversationState;
pub use orchestrator::StoryOrchestrator;
pub use parser::{CHOICES_MARKER, clean_narrative, parse_response};
pub use prompts::StorySeed;
pub use renderer::IncrementalRenderer;
pub use session::{Phase, Session};
