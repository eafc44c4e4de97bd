//! Splitting raw model output into narrative and choices.
//!
//! Model replies are free-form text that should end with the literal marker
//! `CHOICES:` followed by up to four entries introduced by `N)`. The marker
//! convention is the only protocol between the engine and the model, so this
//! module never assumes well-formedness: missing markers, truncated
//! mid-stream text, and short enumerations all degrade to usable output.

use fabula_core::{CHOICE_COUNT, ParsedSegment};
use regex::Regex;
use std::sync::LazyLock;

/// Literal marker separating narrative prose from the choice enumeration.
pub const CHOICES_MARKER: &str = "CHOICES:";

static STORY_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^STORY:\s*").expect("Valid story label regex"));

static ENUMERATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d\)").expect("Valid enumerator regex"));

/// Extract the displayable narrative from raw (possibly partial) model text.
///
/// Takes the portion before the first `CHOICES:` occurrence, strips a leading
/// case-insensitive `STORY:` label, and trims surrounding whitespace. Safe to
/// call on a truncated mid-stream buffer.
///
/// # Examples
///
/// ```
/// use fabula_story::clean_narrative;
///
/// let text = "STORY: Rain falls. CHOICES: 1) Run";
/// assert_eq!(clean_narrative(text), "Rain falls.");
/// ```
pub fn clean_narrative(text: &str) -> String {
    let before_marker = match text.find(CHOICES_MARKER) {
        Some(at) => &text[..at],
        None => text,
    };
    STORY_LABEL
        .replace(before_marker.trim_start(), "")
        .trim()
        .to_string()
}

/// Split a model reply into narrative text and an ordered choice list.
///
/// The text after the first `CHOICES:` marker is split on single-digit
/// enumerators (`1)`, `2)`, ...); fragments are trimmed, empties discarded,
/// and only the first four kept. Without a marker the whole trimmed text is
/// narrative and the choice list is empty.
///
/// This function never fails: any input yields a [`ParsedSegment`]. Callers
/// that lose the reply entirely (e.g. a dropped stream) fall back to
/// [`ParsedSegment::fallback`] instead.
///
/// A digit followed by `)` inside post-marker prose falsely splits an entry.
/// That is a known limitation of the loose marker protocol; the upstream
/// generator's output is not under this system's control, so the contract is
/// validated defensively rather than strengthened into a grammar.
///
/// # Examples
///
/// ```
/// use fabula_story::parse_response;
///
/// let reply = "You enter a dim tavern. CHOICES: 1) Order a drink 2) Eavesdrop";
/// let segment = parse_response(reply);
/// assert_eq!(segment.narrative, "You enter a dim tavern.");
/// assert_eq!(segment.choices, vec!["Order a drink", "Eavesdrop"]);
/// ```
pub fn parse_response(text: &str) -> ParsedSegment {
    match text.split_once(CHOICES_MARKER) {
        None => ParsedSegment {
            narrative: clean_narrative(text),
            choices: Vec::new(),
        },
        Some((before, after)) => {
            let choices = ENUMERATOR
                .split(after)
                .map(str::trim)
                .filter(|fragment| !fragment.is_empty())
                .take(CHOICE_COUNT)
                .map(ToOwned::to_owned)
                .collect();

            ParsedSegment {
                narrative: clean_narrative(before),
                choices,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_narrative_and_four_choices() {
        let reply = "You enter a dim tavern. CHOICES: 1) Order a drink 2) Eavesdrop 3) Leave 4) Pick a fight";
        let segment = parse_response(reply);
        assert_eq!(segment.narrative, "You enter a dim tavern.");
        assert_eq!(
            segment.choices,
            vec!["Order a drink", "Eavesdrop", "Leave", "Pick a fight"]
        );
    }

    #[test]
    fn strips_story_label_case_insensitively() {
        let segment = parse_response("story:   Rain falls. CHOICES: 1) Run");
        assert_eq!(segment.narrative, "Rain falls.");
        assert_eq!(segment.choices, vec!["Run"]);
    }

    #[test]
    fn no_marker_yields_empty_choices() {
        let segment = parse_response("The dragon roars.");
        assert_eq!(segment.narrative, "The dragon roars.");
        assert!(segment.choices.is_empty());
    }

    #[test]
    fn extra_entries_are_truncated_to_four() {
        let reply = "Go. CHOICES: 1) a 2) b 3) c 4) d 5) e";
        let segment = parse_response(reply);
        assert_eq!(segment.choices, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn blank_fragments_are_discarded() {
        let reply = "Go. CHOICES: 1)  2) b 3)   4) d";
        let segment = parse_response(reply);
        assert_eq!(segment.choices, vec!["b", "d"]);
    }

    #[test]
    fn truncated_stream_text_parses_without_panic() {
        let segment = parse_response("You crest the ridge and CHOI");
        assert_eq!(segment.narrative, "You crest the ridge and CHOI");
        assert!(segment.choices.is_empty());

        let segment = parse_response("You crest the ridge. CHOICES: 1) Desc");
        assert_eq!(segment.narrative, "You crest the ridge.");
        assert_eq!(segment.choices, vec!["Desc"]);
    }

    #[test]
    fn parse_is_idempotent_on_clean_narrative() {
        let narrative = parse_response("STORY: The gate creaks open.").narrative;
        let reparsed = parse_response(&narrative);
        assert_eq!(reparsed.narrative, narrative);
        assert!(reparsed.choices.is_empty());
    }

    #[test]
    fn marker_only_reply_has_empty_narrative() {
        let segment = parse_response("CHOICES: 1) Attack 2) Flee");
        assert_eq!(segment.narrative, "");
        assert_eq!(segment.choices, vec!["Attack", "Flee"]);
    }

    #[test]
    fn splits_only_on_first_marker() {
        let segment = parse_response("Before. CHOICES: 1) say CHOICES: aloud 2) wait");
        assert_eq!(segment.narrative, "Before.");
        assert_eq!(segment.choices, vec!["say CHOICES: aloud", "wait"]);
    }
}
