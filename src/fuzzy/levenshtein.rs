// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring matching by edit distance.
//!
//! Plain Levenshtein compares two whole strings. For autocomplete we want the
//! cheapest way to find the query *somewhere inside* the record, and we want to
//! know where that somewhere starts (the scorer penalizes drift from the
//! expected location). Sellers' variant of the DP gives exactly that: the first
//! DP row is all zeros, so an alignment may begin anywhere for free.
//!
//! Running the DP over both strings reversed turns "where the alignment ends"
//! into "where it starts", which is the position the scorer needs.

/// Minimum edits to align `pattern` against a substring of `text` starting at
/// each position.
///
/// Returns a vector of `text.len() + 1` entries: `out[s]` is the smallest edit
/// distance between `pattern` and any `text[s..e]`. The last entry is the
/// empty alignment at the end of the text and always equals `pattern.len()`.
///
/// O(|pattern| × |text|) time, O(|pattern|) scratch space.
pub fn substring_distances(pattern: &[char], text: &[char]) -> Vec<usize> {
    let m = pattern.len();
    let n = text.len();
    let mut out = vec![m; n + 1];

    // col[i]: distance of the last i pattern chars against the best substring
    // of the reversed text ending at the current column.
    let mut col: Vec<usize> = (0..=m).collect();
    for j in 1..=n {
        let tc = text[n - j];
        let mut diag = col[0];
        col[0] = 0;
        for i in 1..=m {
            let above = col[i];
            let cost = usize::from(pattern[m - i] != tc);
            col[i] = (diag + cost).min(col[i - 1] + 1).min(above + 1);
            diag = above;
        }
        out[n - j] = col[m];
    }

    out
}
