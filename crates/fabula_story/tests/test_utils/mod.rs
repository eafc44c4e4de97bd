//! Test utilities for Fabula story engine tests.
//!
//! This module provides a scripted mock driver and a recording presentation
//! sink.

// Each test binary compiles this module independently; not every binary
// touches every helper.
#![allow(dead_code)]

use async_trait::async_trait;
use fabula_core::{ChoiceSet, GenerateRequest, SamplingConfig};
use fabula_error::{DriverError, FabulaResult};
use fabula_interface::{
    FinishReason, InitProgress, ModelLifecycle, PresentationSink, Region, StoryDriver,
    StoryStream, StreamChunk, Streaming,
};
use futures_util::StreamExt;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One scripted generation turn for the mock driver.
#[derive(Debug, Clone)]
pub enum MockTurn {
    /// Stream these deltas, then finish normally.
    Chunks(Vec<String>),
    /// Stream these deltas, then fail mid-stream with the given message.
    FailAfter(Vec<String>, String),
    /// Fail before the stream starts.
    Refuse(String),
}

impl MockTurn {
    /// Script a reply streamed in fixed-size pieces.
    pub fn reply_in_pieces(text: &str, piece_len: usize) -> Self {
        let chunks = text
            .as_bytes()
            .chunks(piece_len.max(1))
            .map(|piece| String::from_utf8(piece.to_vec()).expect("ascii test text"))
            .collect();
        Self::Chunks(chunks)
    }
}

/// Scripted driver implementing both the completion and lifecycle seams.
#[derive(Debug, Default)]
pub struct MockDriver {
    turns: Mutex<VecDeque<MockTurn>>,
    summaries: Mutex<VecDeque<Result<String, String>>>,
    models: Vec<String>,
    init_error: Option<String>,
    loaded_model: Mutex<String>,
}

impl MockDriver {
    pub fn new() -> Self {
        Self {
            models: vec![
                "Llama-3-8B-Instruct-q4f32_1-MLC-1k".to_string(),
                "Phi-3-mini-4k-instruct-q4f16_1-MLC".to_string(),
            ],
            ..Self::default()
        }
    }

    /// Make every initialization attempt fail with `message`.
    pub fn failing_init(message: &str) -> Self {
        Self {
            init_error: Some(message.to_string()),
            ..Self::new()
        }
    }

    /// Queue a streaming turn.
    pub fn push_turn(&self, turn: MockTurn) {
        self.turns.lock().unwrap().push_back(turn);
    }

    /// Queue a non-streaming (summarizer) reply.
    pub fn push_summary(&self, reply: Result<&str, &str>) {
        self.summaries
            .lock()
            .unwrap()
            .push_back(reply.map(str::to_string).map_err(str::to_string));
    }
}

#[async_trait]
impl StoryDriver for MockDriver {
    async fn generate(&self, _req: &GenerateRequest) -> FabulaResult<String> {
        let reply = self
            .summaries
            .lock()
            .unwrap()
            .pop_front()
            .expect("test scripted a summarizer reply");
        reply.map_err(|message| DriverError::new(message).into())
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

#[async_trait]
impl Streaming for MockDriver {
    async fn generate_stream(&self, _req: &GenerateRequest) -> FabulaResult<StoryStream> {
        let turn = self
            .turns
            .lock()
            .unwrap()
            .pop_front()
            .expect("test scripted a streaming turn");

        match turn {
            MockTurn::Chunks(chunks) => {
                let items: Vec<FabulaResult<StreamChunk>> = chunks
                    .into_iter()
                    .map(|content| Ok(StreamChunk::delta(content)))
                    .chain(std::iter::once(Ok(StreamChunk::final_chunk(
                        FinishReason::Stop,
                    ))))
                    .collect();
                Ok(tokio_stream::iter(items).boxed())
            }
            MockTurn::FailAfter(chunks, message) => {
                let stream = async_stream::stream! {
                    for content in chunks {
                        yield Ok(StreamChunk::delta(content));
                    }
                    yield Err(DriverError::new(message).into());
                };
                Ok(stream.boxed())
            }
            MockTurn::Refuse(message) => Err(DriverError::new(message).into()),
        }
    }
}

#[async_trait]
impl ModelLifecycle for MockDriver {
    async fn initialize(
        &self,
        model_id: &str,
        _sampling: &SamplingConfig,
        on_progress: &mut (dyn FnMut(InitProgress) + Send),
    ) -> FabulaResult<()> {
        on_progress(InitProgress {
            progress: 0.25,
            text: format!("Fetching {model_id} [1/4]"),
        });
        on_progress(InitProgress {
            progress: 1.0,
            text: format!("Finished loading {model_id}"),
        });

        if let Some(message) = &self.init_error {
            return Err(DriverError::new(message.clone()).into());
        }

        *self.loaded_model.lock().unwrap() = model_id.to_string();
        Ok(())
    }

    fn available_models(&self) -> Vec<String> {
        self.models.clone()
    }
}

/// Presentation sink that records every operation for assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub visible_regions: Vec<Region>,
    /// Finalized story segments and appended lines, in order.
    pub story_log: Vec<String>,
    /// The mutable current-segment slot, if one exists.
    pub current_segment: Option<String>,
    /// Number of create-or-replace calls on the slot.
    pub segment_updates: usize,
    /// Every text ever written to the slot, in order.
    pub segment_history: Vec<String>,
    pub choices: Vec<String>,
    pub choices_enabled: bool,
    /// Whether the controls are in the transient "generating" state.
    pub choices_generating: bool,
    pub status_history: Vec<String>,
    pub summary: Option<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &str {
        self.status_history
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn is_visible(&self, region: Region) -> bool {
        self.visible_regions.contains(&region)
    }
}

impl PresentationSink for RecordingSink {
    fn show_region(&mut self, region: Region) {
        if !self.visible_regions.contains(&region) {
            self.visible_regions.push(region);
        }
    }

    fn hide_region(&mut self, region: Region) {
        self.visible_regions.retain(|shown| *shown != region);
    }

    fn set_choices(&mut self, choices: &ChoiceSet) {
        self.choices = choices.iter().map(str::to_string).collect();
        self.choices_generating = false;
    }

    fn set_choices_generating(&mut self) {
        self.choices = vec!["...".to_string(); 4];
        self.choices_generating = true;
    }

    fn set_choices_enabled(&mut self, enabled: bool) {
        self.choices_enabled = enabled;
    }

    fn update_current_segment(&mut self, text: &str) {
        self.current_segment = Some(text.to_string());
        self.segment_history.push(text.to_string());
        self.segment_updates += 1;
    }

    fn finalize_current_segment(&mut self) {
        if let Some(text) = self.current_segment.take() {
            self.story_log.push(text);
        }
    }

    fn append_story_line(&mut self, text: &str) {
        self.story_log.push(text.to_string());
    }

    fn display_summary(&mut self, text: &str) {
        self.summary = Some(text.to_string());
    }

    fn set_status(&mut self, text: &str) {
        self.status_history.push(text.to_string());
    }
}
