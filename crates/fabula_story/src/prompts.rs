//! Prompt construction for the three turn triggers.
//!
//! Every prompt repeats the choice-format instruction because the literal
//! `CHOICES:` / `N)` convention is the only protocol between the engine and
//! the model; the parser depends on the model being reminded each turn.

/// System prompt seeding the main story thread.
pub const SYSTEM_PROMPT: &str = "You are an expert RPG game master creating an immersive \
first-person adventure. Write in second person perspective (\"you\") and include basic RPG \
elements like character interactions and decisions. Provide exactly 4 choices for the player \
after each segment. Keep descriptions vivid but concise.";

/// What seeds the opening prompt: a picked genre or the accepted context
/// summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorySeed {
    /// A genre label chosen from the selection UI
    Genre(String),
    /// An accepted context summary
    Summary(String),
}

/// Build the story-opening prompt.
pub fn opening_prompt(seed: &StorySeed) -> String {
    let premise = match seed {
        StorySeed::Genre(genre) => format!("a first-person {genre} RPG adventure"),
        StorySeed::Summary(summary) => format!(
            "a first-person RPG adventure based on this premise: {summary}"
        ),
    };

    format!(
        "Create the opening of {premise}. \
Describe the player's initial situation in second person perspective (\"you\"), \
setting the scene and immediate circumstance they find themselves in. \
Keep it to 2-3 sentences and then provide exactly 4 possible choices for what to do next.\n\n\
Make sure the choices feel like actual RPG actions (like \"Search the room\", \
\"Talk to the merchant\", \"Draw your sword\", etc.) rather than narrative choices.\n\n\
Some choices should be good, some should be bad, and some should be neutral. \
Some choices should have a chance to fail.\n\n\
Format the choices as: CHOICES: 1)... 2)... 3)... 4)..."
    )
}

/// Build the continuation prompt for a chosen option.
pub fn continuation_prompt(choice: &str) -> String {
    format!(
        "Continue the first-person RPG story based on the player choosing: \"{choice}\"\n\n\
Write the next part in second person perspective (\"you\"), describing the immediate results \
of their action and the new situation they face (2-3 sentences). Then provide 4 new \
numbered choices that represent concrete actions the player can take.\n\n\
Format your response as:\n\n\
STORY: [Your story paragraph here]\n\
CHOICES:\n\
1) [First action]\n\
2) [Second action]\n\
3) [Third action]\n\
4) [Fourth action]"
    )
}

/// Build the summarization prompt for free-form user context.
pub fn summarize_prompt(context: &str) -> String {
    format!(
        "Condense the following story context into a short premise of 2-3 sentences, \
keeping the names, places, and stakes that matter. Reply with only the summary text.\n\n\
{context}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_prompt_carries_the_wire_format() {
        let prompt = opening_prompt(&StorySeed::Genre("fantasy".to_string()));
        assert!(prompt.contains("fantasy"));
        assert!(prompt.contains("CHOICES: 1)... 2)... 3)... 4)..."));
    }

    #[test]
    fn summary_seed_is_quoted_into_the_opening() {
        let seed = StorySeed::Summary("A heist in a rain-soaked city.".to_string());
        let prompt = opening_prompt(&seed);
        assert!(prompt.contains("A heist in a rain-soaked city."));
    }

    #[test]
    fn continuation_prompt_embeds_the_literal_choice() {
        let prompt = continuation_prompt("Draw your sword");
        assert!(prompt.contains("choosing: \"Draw your sword\""));
        assert!(prompt.contains("CHOICES:"));
    }

    #[test]
    fn summarize_prompt_appends_the_context() {
        let prompt = summarize_prompt("Three siblings inherit a lighthouse.");
        assert!(prompt.ends_with("Three siblings inherit a lighthouse."));
    }
}
