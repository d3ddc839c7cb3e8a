// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for approximate substring alignment.
//!
//! The per-start edit counts drive the approximate score, so they have to be
//! bounded by the pattern length and agree with plain containment.

#![no_main]

use arbitrary::Arbitrary;
use column_suggest::{approximate_score, substring_distances};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct AlignInput {
    pattern: String,
    text: String,
    distance: u8,
    location: u8,
}

fuzz_target!(|input: AlignInput| {
    let pattern: Vec<char> = input.pattern.chars().take(32).collect();
    let text: Vec<char> = input.text.chars().take(128).collect();
    if pattern.is_empty() {
        return;
    }

    let distances = substring_distances(&pattern, &text);

    // INVARIANT 1: one entry per start position, including the end
    assert_eq!(distances.len(), text.len() + 1);

    // INVARIANT 2: never worse than deleting the whole pattern
    assert!(distances.iter().all(|&d| d <= pattern.len()));

    // INVARIANT 3: zero edits somewhere iff the pattern occurs verbatim
    let pattern_str: String = pattern.iter().collect();
    let text_str: String = text.iter().collect();
    let contained = text_str.contains(pattern_str.as_str());
    assert_eq!(distances.contains(&0), contained);

    // INVARIANT 4: containment short-circuits to the best score
    let score = approximate_score(
        &text_str,
        &pattern_str,
        usize::from(input.distance),
        usize::from(input.location),
    );
    assert!(score >= 0.0);
    assert_eq!(score == 0.0, contained);

    // INVARIANT 5: a pattern aligns against itself for free at the start
    assert_eq!(substring_distances(&pattern, &pattern)[0], 0);
});
