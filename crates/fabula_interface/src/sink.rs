//! Presentation sink trait.

use crate::Region;
use fabula_core::ChoiceSet;

/// Rendering operations the engine drives during a session.
///
/// The sink is the engine's only view of the UI. It owns a story log with a
/// single mutable "current segment" slot, four choice controls, named
/// show/hide regions, and a free-form status line. Implementations are only
/// ever mutated by one turn at a time; turns are serialized upstream.
pub trait PresentationSink {
    /// Make a named region visible.
    fn show_region(&mut self, region: Region);

    /// Hide a named region.
    fn hide_region(&mut self, region: Region);

    /// Write the four choice labels.
    fn set_choices(&mut self, choices: &ChoiceSet);

    /// Put the choice controls into the transient "generating" placeholder
    /// state used while the choice list is still streaming in.
    fn set_choices_generating(&mut self);

    /// Enable or disable all four choice controls.
    fn set_choices_enabled(&mut self, enabled: bool);

    /// Create the current-segment slot if absent, then replace its text.
    ///
    /// This is a textual replace, not an append: each call carries the full
    /// narrative accumulated so far.
    fn update_current_segment(&mut self, text: &str);

    /// Mark the current segment finalized; it joins the story log and is no
    /// longer mutable in place.
    fn finalize_current_segment(&mut self);

    /// Append a standalone line (e.g. an error notice) to the story log.
    fn append_story_line(&mut self, text: &str);

    /// Present a generated context summary for accept/reject review.
    fn display_summary(&mut self, text: &str);

    /// Display free-form status or error text.
    fn set_status(&mut self, text: &str);
}
