//! Multi-word queries: per-word scoring, all vs any, whole-query mode.

use column_suggest::SearchConfig;

use super::common::{approximate, originals, search_with, TITLES};

#[test]
fn test_all_words_must_match_by_default() {
    let results = search_with(approximate(), TITLES, "senior eng");
    assert_eq!(
        originals(&results)[..2],
        ["Senior Software Engineer", "Senior Engineer"]
    );
    assert_eq!(results[0].score, 0.0);
    assert_eq!(results[1].score, 0.0);

    assert!(search_with(approximate(), TITLES, "nurse zzzz").is_empty());
}

#[test]
fn test_any_word_may_match() {
    let config = SearchConfig {
        match_all_tokens: false,
        ..approximate()
    };
    let results = search_with(config, TITLES, "nurse zzzz");
    assert_eq!(
        originals(&results)[..2],
        ["Registered Nurse", "Nurse Practitioner"]
    );
    // the rejected word doesn't drag the mean down
    assert_eq!(results[0].score, 0.0);
    assert_eq!(results[0].highlighted_fragments(), vec!["Nurse"]);
}

#[test]
fn test_word_order_does_not_matter_when_tokenized() {
    let forward = search_with(approximate(), TITLES, "senior engineer");
    let backward = search_with(approximate(), TITLES, "engineer senior");
    assert_eq!(originals(&forward), originals(&backward));
}

#[test]
fn test_whole_query_mode_needs_the_phrase() {
    let config = SearchConfig {
        tokenize: false,
        ..approximate()
    };
    let results = search_with(config, TITLES, "senior engineer");
    assert_eq!(results[0].original, "Senior Engineer");
    assert_eq!(results[0].score, 0.0);
    assert_eq!(results.iter().filter(|r| r.score == 0.0).count(), 1);
}

#[test]
fn test_extra_whitespace_is_ignored() {
    let tidy = search_with(approximate(), TITLES, "data engineer");
    let messy = search_with(approximate(), TITLES, "  data \t  engineer ");
    assert_eq!(tidy, messy);
}
