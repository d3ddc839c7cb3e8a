//! The cached searcher answers exactly like the matcher it wraps.

use column_suggest::{CachedSearcher, CorpusIndex, Matcher, SearchConfig};

use super::common::{approximate, subsequence, TITLES};

const QUERIES: &[&str] = &[
    "eng", "engi", "engin", "engine", "engineer", "engin", "Engin", "  engin ", "nurse", "zz",
];

#[test]
fn test_cached_answers_match_uncached() {
    for config in [approximate(), subsequence()] {
        let mut searcher = CachedSearcher::from_values(config, TITLES).unwrap();
        for query in QUERIES {
            let expected = searcher.matcher().search(searcher.index(), query);
            assert_eq!(searcher.search(query), expected.as_slice(), "query {:?}", query);
        }
    }
}

#[test]
fn test_retyped_prefix_hits() {
    let mut searcher = CachedSearcher::from_values(approximate(), TITLES).unwrap();
    for query in QUERIES {
        searcher.search(query);
    }
    // "engin", "Engin" and "  engin " share a key
    assert_eq!(searcher.misses(), 7);
    assert_eq!(searcher.hits(), 3);
    assert_eq!(searcher.len(), 7);
}

#[test]
fn test_rebuild_drops_stale_answers() {
    let mut searcher = CachedSearcher::from_values(approximate(), TITLES).unwrap();
    assert!(!searcher.search("nurse").is_empty());

    searcher.rebuild(["Chef", "Sous Chef"]);
    assert!(searcher.is_empty());
    assert!(searcher.search("nurse").is_empty());
    assert_eq!(searcher.search("chef").len(), 2);
}

#[test]
fn test_replace_index_and_config() {
    let config = approximate();
    let mut searcher = CachedSearcher::with_capacity(
        Matcher::new(config.clone()).unwrap(),
        CorpusIndex::build(TITLES, config.normalization),
        None,
    );
    assert_eq!(searcher.search("engineer").len(), 5);

    searcher
        .set_config(SearchConfig {
            max_results: 2,
            ..config
        })
        .unwrap();
    assert!(searcher.is_empty());
    assert_eq!(searcher.search("engineer").len(), 2);

    searcher.replace_index(CorpusIndex::build(["Engineer"], searcher.index().normalization()));
    assert_eq!(searcher.search("engineer").len(), 1);
}

#[test]
fn test_bounded_cache_stays_bounded() {
    let mut searcher = CachedSearcher::with_capacity(
        Matcher::new(approximate()).unwrap(),
        CorpusIndex::build(TITLES, approximate().normalization),
        Some(3),
    );
    for query in QUERIES {
        searcher.search(query);
        assert!(searcher.len() <= 3);
    }
}

#[test]
fn test_spacing_variants_share_highlights() {
    for tokenize in [false, true] {
        let config = SearchConfig {
            tokenize,
            ..SearchConfig::subsequence()
        };
        let mut searcher = CachedSearcher::from_values(config, ["Senior Engineer"]).unwrap();
        let first = searcher.search("senior engineer").to_vec();
        let direct = searcher.matcher().search(searcher.index(), "Senior   ENGINEER");

        assert_eq!(searcher.search("Senior   ENGINEER"), direct.as_slice());
        assert_eq!(first, direct);
        assert_eq!(searcher.hits(), 1);
        assert_eq!(direct[0].highlighted_fragments().concat().replace(' ', ""), "SeniorEngineer");
    }
}
