use fabula_core::{ChoiceSet, Summary};

#[test]
fn draft_summary_is_not_accepted() {
    let summary = Summary::draft("A caravan vanishes on the salt road.");
    assert!(!summary.is_accepted());
    assert_eq!(summary.text(), "A caravan vanishes on the salt road.");
}

#[test]
fn accept_locks_the_text_in() {
    let summary = Summary::draft("A caravan vanishes on the salt road.").accept();
    assert!(summary.is_accepted());
    assert_eq!(summary.text(), "A caravan vanishes on the salt road.");

    // Accepting twice is a no-op.
    let summary = summary.accept();
    assert!(summary.is_accepted());
}

#[test]
fn choice_set_always_holds_four_labels() {
    let set = ChoiceSet::default();
    assert_eq!(set.labels().len(), 4);
    assert!(set.iter().all(|label| !label.trim().is_empty()));

    let set = ChoiceSet::new([
        String::new(),
        String::new(),
        String::new(),
        String::new(),
    ]);
    assert_eq!(
        set.iter().collect::<Vec<_>>(),
        vec!["Choice 1", "Choice 2", "Choice 3", "Choice 4"]
    );
}

#[test]
fn choice_set_indexing_is_bounded() {
    let set = ChoiceSet::default();
    assert!(set.get(3).is_some());
    assert!(set.get(4).is_none());
}
