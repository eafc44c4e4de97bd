//! Reconciling extracted choices into a full choice set.

use fabula_core::{CHOICE_COUNT, ChoiceSet};

/// Normalize extracted choices to exactly four labels.
///
/// Missing entries are backfilled with `"Choice {n}"` placeholders by
/// 1-based position; blanks are replaced the same way. More than four
/// entries cannot occur upstream (the parser already truncates), but the
/// input is clamped anyway.
///
/// # Examples
///
/// ```
/// use fabula_story::reconcile;
///
/// let set = reconcile(vec!["Run".to_string()]);
/// let labels: Vec<&str> = set.iter().collect();
/// assert_eq!(labels, vec!["Run", "Choice 2", "Choice 3", "Choice 4"]);
/// ```
pub fn reconcile(choices: Vec<String>) -> ChoiceSet {
    let mut labels: Vec<String> = choices.into_iter().take(CHOICE_COUNT).collect();
    while labels.len() < CHOICE_COUNT {
        labels.push(ChoiceSet::placeholder(labels.len() + 1));
    }
    let labels: [String; CHOICE_COUNT] = labels
        .try_into()
        .expect("reconciled label list is exactly four entries");
    ChoiceSet::new(labels)
}
