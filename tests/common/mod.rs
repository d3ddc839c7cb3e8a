//! Shared test utilities and fixtures.

#![allow(dead_code)]

use column_suggest::{CorpusIndex, MatchResult, Matcher, SearchConfig};

// Re-export canonical test utilities from column_suggest::testing
pub use column_suggest::testing::{check_spans, index_for, originals, test_config, JOB_TITLES};

// ============================================================================
// CORPORA
// ============================================================================

/// A larger column of job titles with shared words, typos and accents.
pub const TITLES: &[&str] = &[
    "Software Engineer",
    "Senior Software Engineer",
    "Senior Engineer",
    "Data Scientist",
    "Data Engineer",
    "Engineering Manager",
    "Product Manager",
    "Café Münster",
    "Registered Nurse",
    "C++ Developer",
    "",
    "Nurse Practitioner",
];

// ============================================================================
// HELPERS
// ============================================================================

/// Search `values` with `config`, panicking on an invalid config.
pub fn search_with(config: SearchConfig, values: &[&str], query: &str) -> Vec<MatchResult> {
    let index = index_for(&config, values);
    Matcher::new(config)
        .expect("test config should be valid")
        .search(&index, query)
}

/// Default approximate settings with a gate low enough for short fixtures.
pub fn approximate() -> SearchConfig {
    test_config(SearchConfig::default())
}

/// Subsequence preset with a gate low enough for short fixtures.
pub fn subsequence() -> SearchConfig {
    test_config(SearchConfig::subsequence())
}

/// Both presets, for tests that must hold regardless of algorithm.
pub fn both_algorithms() -> [SearchConfig; 2] {
    [approximate(), subsequence()]
}

pub fn titles_index(config: &SearchConfig) -> CorpusIndex {
    index_for(config, TITLES)
}
