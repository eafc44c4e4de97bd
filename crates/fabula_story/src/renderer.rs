//! Live rendering of an in-flight generation turn.

use crate::parser::{CHOICES_MARKER, clean_narrative};
use fabula_core::StreamBuffer;
use fabula_interface::PresentationSink;
use tracing::trace;

/// Renders a continuously-updating narrative view while a stream is in
/// flight, without ever flashing the raw `CHOICES:` marker or partial
/// enumeration text.
///
/// The renderer owns the turn's [`StreamBuffer`] and a single
/// current-segment presentation slot. Each delta carries a suffix of the
/// reply; the renderer reconstructs the cumulative text and *replaces* the
/// slot's content with the full pre-marker narrative on every update.
#[derive(Debug, Default)]
pub struct IncrementalRenderer {
    buffer: StreamBuffer,
    segment_open: bool,
    marker_seen: bool,
}

impl IncrementalRenderer {
    /// Create a renderer with no turn in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation turn.
    ///
    /// Demotes a segment left over from a previous turn (a failed turn can
    /// leave one open), resets the buffer, and disables the choice controls
    /// for the duration of the turn.
    pub fn begin_turn(&mut self, sink: &mut dyn PresentationSink) {
        if self.segment_open {
            sink.finalize_current_segment();
            self.segment_open = false;
        }
        self.buffer.clear();
        self.marker_seen = false;
        sink.set_choices_enabled(false);
    }

    /// Feed one delta from the stream.
    ///
    /// Until the buffer contains `CHOICES:`, the displayable narrative is
    /// recomputed and the current segment replaced. Once the marker appears
    /// the pre-marker portion no longer changes, so narrative updates freeze
    /// and the choice controls switch to their "generating" state.
    pub fn push_delta(&mut self, delta: &str, sink: &mut dyn PresentationSink) {
        self.buffer.push(delta);

        if self.marker_seen {
            return;
        }

        if self.buffer.as_str().contains(CHOICES_MARKER) {
            trace!(buffered = self.buffer.len(), "choices marker reached");
            self.marker_seen = true;
            sink.set_choices_generating();
            return;
        }

        let visible = clean_narrative(self.buffer.as_str());
        if !visible.is_empty() {
            sink.update_current_segment(&visible);
            self.segment_open = true;
        }
    }

    /// The raw text accumulated so far this turn.
    pub fn transcript(&self) -> &str {
        self.buffer.as_str()
    }

    /// End the turn: write the final parsed narrative into the slot, mark it
    /// finalized, and hand back the full transcript for the assistant
    /// message.
    pub fn finish_turn(
        &mut self,
        narrative: &str,
        sink: &mut dyn PresentationSink,
    ) -> String {
        if self.segment_open || !narrative.is_empty() {
            sink.update_current_segment(narrative);
            sink.finalize_current_segment();
        }
        self.segment_open = false;
        self.marker_seen = false;
        std::mem::take(&mut self.buffer).into_text()
    }

    /// Abandon the turn after a stream fault.
    ///
    /// The buffer is discarded; a partially-rendered segment stays on screen
    /// and is demoted by the next `begin_turn`.
    pub fn abort_turn(&mut self) {
        self.buffer.clear();
        self.marker_seen = false;
    }
}
