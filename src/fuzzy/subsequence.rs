// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-order character walk with contiguity rewards.
//!
//! Walks the candidate once, consuming pattern characters in order. A match
//! right after the previous one (a contiguous run) earns more than a match
//! after a gap. Candidates whose length is far from the pattern's, beyond the
//! configured tolerance, lose score in proportion to how long they are.

/// Points for a pattern character matched right after the previous match.
/// The first character counts as contiguous when it opens the candidate.
pub const CONTIGUOUS_MATCH_POINTS: f64 = 0.9;

/// Points for a pattern character matched after a gap.
pub const GAPPED_MATCH_POINTS: f64 = 0.6;

/// Score for a candidate that contains the pattern verbatim.
pub const CONTAINMENT_SCORE: f64 = 1.0;

/// Score `candidate` against `pattern` in `[0, 1]`, higher is better.
///
/// - Verbatim containment short-circuits to 1.0, before any length penalty.
/// - If some pattern character can't be found in order, the score is 0.
/// - Otherwise the accumulated points, reduced by the length penalty when
///   `|len(candidate) - len(pattern)| > distance`, divided by `len(pattern)`.
///
/// Lengths are in characters. Both inputs are expected to be normalized.
pub fn subsequence_score(candidate: &str, pattern: &str, distance: usize) -> f64 {
    if candidate.contains(pattern) {
        return CONTAINMENT_SCORE;
    }

    let pattern: Vec<char> = pattern.chars().collect();
    let mut score = 0.0;
    let mut matched = 0;
    // Position right after the previous match; 0 before any match.
    let mut next_contiguous = 0;
    let mut candidate_len = 0;

    for (idx, c) in candidate.chars().enumerate() {
        candidate_len = idx + 1;
        if matched < pattern.len() && c == pattern[matched] {
            score += if idx == next_contiguous {
                CONTIGUOUS_MATCH_POINTS
            } else {
                GAPPED_MATCH_POINTS
            };
            next_contiguous = idx + 1;
            matched += 1;
        }
    }

    if matched < pattern.len() {
        return 0.0;
    }

    score *= length_penalty(candidate_len, pattern.len(), distance);
    score / pattern.len() as f64
}

/// Multiplier in `[0, 1]` for candidates whose length differs from the
/// pattern's by more than `distance` characters.
pub fn length_penalty(candidate_len: usize, pattern_len: usize, distance: usize) -> f64 {
    let diff = candidate_len.abs_diff(pattern_len);
    if diff <= distance || candidate_len == 0 {
        return 1.0;
    }
    (1.0 - (diff - distance) as f64 / candidate_len as f64).max(0.0)
}
