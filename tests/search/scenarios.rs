//! End-to-end scenarios: a column, a query, the suggestions a user would see.

use column_suggest::{Matcher, SearchConfig, SearchError};

use super::common::{both_algorithms, originals, search_with, JOB_TITLES};

// ============================================================================
// JOB TITLES
// ============================================================================

#[test]
fn test_engineer_ranks_both_engineers() {
    for base in [SearchConfig::default(), SearchConfig::subsequence()] {
        let config = SearchConfig {
            min_char_required: 2,
            max_results: 5,
            ..base
        };
        let results = search_with(config, JOB_TITLES, "engineer");

        assert_eq!(originals(&results), vec!["Software Engineer", "Senior Engineer"]);
        for result in &results {
            assert_eq!(result.highlighted_fragments(), vec!["Engineer"]);
        }
    }
}

#[test]
fn test_unrelated_query_is_empty_not_error() {
    for config in both_algorithms() {
        let results = search_with(config, &["Alpha", "Beta", "Gamma"], "zz");
        assert!(results.is_empty());
    }
}

#[test]
fn test_empty_corpus() {
    for config in both_algorithms() {
        assert!(search_with(config, &[], "engineer").is_empty());
    }
}

#[test]
fn test_short_query_waits_for_more_input() {
    let config = SearchConfig::default();
    assert_eq!(config.min_char_required, 3);

    assert!(search_with(config.clone(), JOB_TITLES, "en").is_empty());
    assert!(search_with(config.clone(), JOB_TITLES, "  en   ").is_empty());
    assert_eq!(search_with(config, JOB_TITLES, "eng").len(), 2);
}

#[test]
fn test_typo_still_suggests_without_highlight() {
    let results = search_with(SearchConfig::default(), JOB_TITLES, "enginer");
    assert_eq!(originals(&results), vec!["Senior Engineer", "Software Engineer"]);
    assert!(results.iter().all(|r| r.spans.is_empty()));
}

#[test]
fn test_invalid_config_is_rejected_up_front() {
    let config = SearchConfig {
        threshold: 1.5,
        ..SearchConfig::default()
    };
    assert!(matches!(
        Matcher::new(config),
        Err(SearchError::ThresholdOutOfRange { .. })
    ));
}

// ============================================================================
// DIACRITICS
// ============================================================================
//
// Matching folds accents, highlighting does not: "munster" finds
// "Café Münster" but has nothing literal to emphasize.

#[test]
fn test_unaccented_query_matches_accented_record() {
    for config in both_algorithms() {
        let results = search_with(config, &["Café Münster", "Cafe Berlin"], "munster");
        assert_eq!(originals(&results), vec!["Café Münster"]);
        assert!(results[0].spans.is_empty());
    }
}

#[test]
fn test_accented_query_matches_and_highlights() {
    for config in both_algorithms() {
        let results = search_with(config, &["Café Münster", "Cafe Berlin"], "Münster");
        assert_eq!(originals(&results), vec!["Café Münster"]);
        assert_eq!(results[0].highlighted_fragments(), vec!["Münster"]);
    }
}

#[test]
fn test_accented_query_matches_unaccented_record() {
    let results = search_with(super::common::approximate(), &["Cafe Berlin"], "café");
    assert_eq!(originals(&results), vec!["Cafe Berlin"]);
    assert!(results[0].spans.is_empty());
}
