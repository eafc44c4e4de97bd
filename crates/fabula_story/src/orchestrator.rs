//! Turn sequencing between the driver, the parser, and the presentation sink.

use crate::{
    ConversationState, IncrementalRenderer, Session, StoryConfig,
    choices::reconcile,
    parser::parse_response,
    prompts::{self, StorySeed},
};
use fabula_core::{ChoiceSet, FALLBACK_NARRATIVE, GenerateRequest};
use fabula_error::{FabulaResult, SessionError, SessionErrorKind};
use fabula_interface::{InitProgress, ModelLifecycle, PresentationSink, Region, Streaming};
use futures_util::StreamExt;
use tracing::{debug, error, info, instrument};

/// Sequences a story session: builds prompts, drives the streaming
/// completion provider, feeds deltas to the incremental renderer, finalizes
/// turns through the parser and reconciler, and grows the conversation
/// threads.
///
/// One orchestrator is one session. All collaborator state (driver, sink,
/// threads, phase machine) is owned here; there is no ambient global state.
///
/// Faults during an awaited operation never escape: generation failures
/// append a visible error line and reset the choice controls to a uniform
/// retry set, initialization failures surface as status text, and in both
/// cases the sink is left interactable.
pub struct StoryOrchestrator<D, S> {
    driver: D,
    sink: S,
    config: StoryConfig,
    model: String,
    conversation: ConversationState,
    renderer: IncrementalRenderer,
    session: Session,
    choices: ChoiceSet,
}

impl<D, S> StoryOrchestrator<D, S>
where
    D: Streaming + ModelLifecycle,
    S: PresentationSink + Send,
{
    /// Create a session around a driver and a presentation sink.
    pub fn new(driver: D, sink: S, config: StoryConfig) -> Self {
        let conversation = ConversationState::new(config.system_prompt().clone());
        let model = config.model().clone();
        Self {
            driver,
            sink,
            config,
            model,
            conversation,
            renderer: IncrementalRenderer::new(),
            session: Session::new(),
            choices: ChoiceSet::default(),
        }
    }

    /// Model identifiers available for the selection UI.
    pub fn available_models(&self) -> Vec<String> {
        self.driver.available_models()
    }

    /// The session phase machine.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The conversation threads.
    pub fn conversation(&self) -> &ConversationState {
        &self.conversation
    }

    /// The labels currently on the choice controls.
    pub fn choices(&self) -> &ChoiceSet {
        &self.choices
    }

    /// The presentation sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Tear the session down, recovering the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Initialize (downloading if necessary) the selected model, forwarding
    /// progress reports to the status region.
    ///
    /// On failure the error is surfaced as status text and the session stays
    /// where it was, so the initiating control may retry; downstream regions
    /// remain hidden.
    ///
    /// # Errors
    ///
    /// Returns a `SessionError` if initialization is not legal in the
    /// current phase (e.g. mid-story). Driver faults are recovered, not
    /// returned.
    #[instrument(skip(self), fields(model = model_id.unwrap_or("default")))]
    pub async fn initialize_model(&mut self, model_id: Option<&str>) -> FabulaResult<()> {
        self.session.check_initialize()?;

        let model = model_id.unwrap_or(self.config.model()).to_string();
        self.sink.show_region(Region::Status);

        let sink = &mut self.sink;
        let mut on_progress =
            |report: InitProgress| sink.set_status(&report.text);

        match self
            .driver
            .initialize(&model, self.config.sampling(), &mut on_progress)
            .await
        {
            Ok(()) => {
                self.session.model_ready()?;
                self.model = model;
                info!(model = %self.model, "model initialized");
                self.sink.set_status("Model ready!");
                self.sink.show_region(Region::Summary);
                self.sink.show_region(Region::Genre);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "model initialization failed");
                self.sink.set_status(&format!("Error loading model: {e}"));
                Ok(())
            }
        }
    }

    /// Summarize free-form user context on the summarizer thread and present
    /// the draft for accept/reject review.
    ///
    /// # Errors
    ///
    /// Returns a `SessionError` synchronously for empty context (no state is
    /// mutated) or an illegal phase. Driver faults are recovered: the
    /// summarizer thread keeps the user message, the failure is surfaced as
    /// status text, and regeneration is re-enabled.
    #[instrument(skip(self, context))]
    pub async fn summarize_context(&mut self, context: &str) -> FabulaResult<()> {
        if context.trim().is_empty() {
            self.sink
                .set_status("Please enter some story context to summarize.");
            return Err(SessionError::new(SessionErrorKind::EmptyContext).into());
        }
        self.session.begin_summary()?;

        self.conversation
            .summarizer_mut()
            .push_user(prompts::summarize_prompt(context));

        let request = GenerateRequest {
            messages: self.conversation.summarizer().messages().to_vec(),
            model: Some(self.model.clone()),
            temperature: None,
            top_p: None,
        };

        match self.driver.generate(&request).await {
            Ok(text) => {
                debug!(length = text.len(), "summary drafted");
                self.conversation.summarizer_mut().push_assistant(text.clone());
                self.session.summary_generated(text.clone())?;
                self.sink.display_summary(&text);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "summarization failed");
                self.session.summary_failed()?;
                self.sink
                    .set_status(&format!("Error summarizing context: {e}"));
                Ok(())
            }
        }
    }

    /// Lock the drafted summary in, unlocking story start.
    ///
    /// # Errors
    ///
    /// Returns a `SessionError` if no draft is awaiting review.
    pub fn accept_summary(&mut self) -> FabulaResult<()> {
        self.session.accept_summary()
    }

    /// Discard the drafted summary and re-enable regeneration.
    ///
    /// # Errors
    ///
    /// Returns a `SessionError` if no draft is awaiting review.
    pub fn reject_summary(&mut self) -> FabulaResult<()> {
        self.session.reject_summary()
    }

    /// Start the story with an opening turn.
    ///
    /// The opening prompt is parameterized by `genre` when given, otherwise
    /// by the accepted context summary. Gated: not legal before a summary
    /// has been generated and explicitly accepted.
    ///
    /// # Errors
    ///
    /// Returns a `SessionError` if the gate is not satisfied. Generation
    /// faults inside the turn are recovered (see [`Self::choose`]).
    #[instrument(skip(self))]
    pub async fn start_story(&mut self, genre: Option<&str>) -> FabulaResult<()> {
        let summary = self.session.start_story()?;
        self.sink.show_region(Region::Story);

        let seed = match genre {
            Some(genre) => StorySeed::Genre(genre.to_string()),
            None => StorySeed::Summary(summary),
        };
        self.run_turn(prompts::opening_prompt(&seed)).await
    }

    /// Advance the story by the player's chosen option.
    ///
    /// The continuation prompt carries the literal label currently on the
    /// selected control.
    ///
    /// # Errors
    ///
    /// Returns a `SessionError` for an out-of-range index or a turn already
    /// in flight. Generation faults are recovered: the story thread keeps
    /// the user message, an error line joins the story log, and all four
    /// controls read the uniform retry label, re-enabled.
    #[instrument(skip(self))]
    pub async fn choose(&mut self, index: usize) -> FabulaResult<()> {
        let label = self
            .choices
            .get(index)
            .ok_or_else(|| SessionError::new(SessionErrorKind::ChoiceOutOfRange(index)))?
            .to_string();

        debug!(choice = %label, "player chose");
        self.run_turn(prompts::continuation_prompt(&label)).await
    }

    /// One request/response cycle with the model.
    ///
    /// The user prompt is appended before the provider call and is never
    /// rolled back; the assistant reply is appended only on completion.
    async fn run_turn(&mut self, prompt: String) -> FabulaResult<()> {
        self.session.begin_turn()?;
        self.conversation.story_mut().push_user(prompt);
        self.renderer.begin_turn(&mut self.sink);

        let request = GenerateRequest {
            messages: self.conversation.story().messages().to_vec(),
            model: Some(self.model.clone()),
            temperature: None,
            top_p: None,
        };

        match self.stream_reply(&request).await {
            Ok(()) => {
                let segment = parse_response(self.renderer.transcript());
                let choices = reconcile(segment.choices.clone());

                let transcript = self.renderer.finish_turn(&segment.narrative, &mut self.sink);
                self.conversation.story_mut().push_assistant(transcript);

                self.sink.set_choices(&choices);
                self.sink.set_choices_enabled(true);
                self.choices = choices;
            }
            Err(e) => {
                error!(error = %e, "generation turn failed");
                self.renderer.abort_turn();
                self.sink.append_story_line(FALLBACK_NARRATIVE);

                let retry = ChoiceSet::retry();
                self.sink.set_choices(&retry);
                self.sink.set_choices_enabled(true);
                self.choices = retry;
            }
        }

        self.session.end_turn()
    }

    /// Consume the delta stream for one turn, feeding the renderer in
    /// arrival order.
    async fn stream_reply(&mut self, request: &GenerateRequest) -> FabulaResult<()> {
        let mut stream = self.driver.generate_stream(request).await?;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            self.renderer.push_delta(&chunk.content, &mut self.sink);
            if chunk.is_final {
                break;
            }
        }
        Ok(())
    }
}
