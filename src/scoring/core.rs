// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind acceptance.
//!
//! # Approximate
//!
//! For a word of `m` characters aligned at start `s` with `e` edits:
//!
//! ```text
//! score = e / m + |s - location| / distance
//! ```
//!
//! The record keeps its best (lowest) alignment. With `distance == 0` any
//! drift from `location` costs a full 1.0. A word contained verbatim scores
//! 0.0 wherever it sits, so exact hits are never lost to position.
//!
//! # Subsequence
//!
//! See [`crate::fuzzy::subsequence_score`]: contiguous runs earn 0.9 per
//! character, gaps 0.6, normalized by word length, verbatim containment is 1.0.
//!
//! # Words
//!
//! Each query word is scored on its own. With `match_all_tokens` every word
//! must be accepted, otherwise one is enough; the record's score is the mean
//! of its accepted words. Since every accepted word is on the right side of
//! the threshold, so is their mean.

use crate::config::{Algorithm, SearchConfig};
use crate::fuzzy::{subsequence_score, substring_distances};

/// Approximate score for a word found verbatim in the candidate.
pub const EXACT_APPROXIMATE_SCORE: f64 = 0.0;

/// Approximate score for an alignment that drifted with `distance == 0`.
pub const MAX_PROXIMITY_PENALTY: f64 = 1.0;

impl Algorithm {
    /// Is `score` on the accepting side of `threshold`?
    ///
    /// `Approximate`: `score <= threshold`. `Subsequence`: `score > threshold`.
    #[inline]
    pub fn accepts(self, score: f64, threshold: f64) -> bool {
        match self {
            Algorithm::Approximate => score <= threshold,
            Algorithm::Subsequence => score > threshold,
        }
    }
}

/// Score of a single alignment: error ratio plus proximity penalty.
pub fn alignment_score(
    errors: usize,
    pattern_len: usize,
    start: usize,
    location: usize,
    distance: usize,
) -> f64 {
    let accuracy = errors as f64 / pattern_len as f64;
    let proximity = start.abs_diff(location);
    if distance == 0 {
        return if proximity == 0 {
            accuracy
        } else {
            MAX_PROXIMITY_PENALTY
        };
    }
    accuracy + proximity as f64 / distance as f64
}

/// Best approximate score of `pattern` anywhere in `candidate`, lower is better.
///
/// An empty pattern trivially matches and scores 0.0.
pub fn approximate_score(candidate: &str, pattern: &str, distance: usize, location: usize) -> f64 {
    if candidate.contains(pattern) {
        return EXACT_APPROXIMATE_SCORE;
    }

    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = candidate.chars().collect();
    substring_distances(&pattern, &text)
        .into_iter()
        .enumerate()
        .map(|(start, errors)| alignment_score(errors, pattern.len(), start, location, distance))
        .fold(f64::INFINITY, f64::min)
}

/// Score one normalized word against one normalized candidate.
pub fn word_score(config: &SearchConfig, candidate: &str, word: &str) -> f64 {
    match config.algorithm {
        Algorithm::Approximate => {
            approximate_score(candidate, word, config.distance, config.location)
        }
        Algorithm::Subsequence => subsequence_score(candidate, word, config.distance),
    }
}

/// Score a candidate against all query words; `None` if it's rejected.
pub fn record_score(config: &SearchConfig, candidate: &str, words: &[&str]) -> Option<f64> {
    let mut total = 0.0;
    let mut accepted = 0usize;

    for word in words {
        let score = word_score(config, candidate, word);
        if config.algorithm.accepts(score, config.threshold) {
            total += score;
            accepted += 1;
        } else if config.match_all_tokens {
            return None;
        }
    }

    (accepted > 0).then(|| total / accepted as f64)
}
