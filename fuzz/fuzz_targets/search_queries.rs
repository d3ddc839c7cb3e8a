// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for whole searches.
//!
//! Arbitrary columns and queries through both algorithms: no panics, results
//! bounded and ordered, spans inside the original text.

#![no_main]

use arbitrary::Arbitrary;
use column_suggest::testing::check_spans;
use column_suggest::{CorpusIndex, Matcher, SearchConfig};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct SearchInput {
    cells: Vec<String>,
    query: String,
    subsequence: bool,
    tokenize: bool,
    match_all_tokens: bool,
    max_results: u8,
    threshold: u8,
}

/// Keep the first `max` characters; byte slicing could split a character.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fuzz_target!(|input: SearchInput| {
    let base = if input.subsequence {
        SearchConfig::subsequence()
    } else {
        SearchConfig::default()
    };
    let config = SearchConfig {
        max_results: usize::from(input.max_results % 16) + 1,
        // [0, 0.99]; both algorithms accept that range
        threshold: f64::from(input.threshold % 100) / 100.0,
        min_char_required: 1,
        tokenize: input.tokenize,
        match_all_tokens: input.match_all_tokens,
        ..base
    };
    let Ok(matcher) = Matcher::new(config.clone()) else {
        panic!("generated config should be valid: {:?}", config);
    };

    let cells: Vec<&str> = input
        .cells
        .iter()
        .take(64)
        .map(|c| truncate_chars(c, 100))
        .collect();
    let index = CorpusIndex::build(&cells, config.normalization);
    let query = truncate_chars(&input.query, 50);

    let results = matcher.search(&index, query);

    // INVARIANT 1: bounded by max_results
    assert!(results.len() <= config.max_results);

    // INVARIANT 2: best first
    for pair in results.windows(2) {
        assert_ne!(
            config.algorithm.compare(pair[0].score, pair[1].score),
            std::cmp::Ordering::Greater,
            "results out of order: {} before {}",
            pair[0].score,
            pair[1].score
        );
    }

    // INVARIANT 3: ids point back to the cell that was shown
    for result in &results {
        assert_eq!(cells[result.record.as_usize()], result.original);
    }

    // INVARIANT 4: spans well-formed
    if let Err(violation) = check_spans(&results) {
        panic!("{} (query {:?})", violation, query);
    }

    // INVARIANT 5: a blank query finds nothing
    if query.trim().is_empty() {
        assert!(results.is_empty());
    }
});
