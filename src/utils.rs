// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String normalization shared by records and queries.
//!
//! Records and queries go through the same function, so whatever happens to one
//! happens to the other. That symmetry is what makes "exact containment in the
//! display text" imply "exact containment in the normalized text".

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use crate::config::Normalization;

/// Normalize a string for matching.
///
/// - "Café Münster" → "cafe munster" (both modes)
/// - "C++ / Rust" → "c++ / rust" (`Lowercase`), "c rust" (`Alphanumeric`)
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. Lowercase
/// 2. NFD normalize and drop combining marks (diacritic folding)
/// 3. `Alphanumeric` only: drop everything outside `[a-z0-9\s]`
/// 4. Collapse whitespace
///
/// Without the feature, step 2 is skipped and accented letters survive
/// `Lowercase` but are dropped by `Alphanumeric`.
pub fn normalize(value: &str, mode: Normalization) -> String {
    let folded = fold(&value.to_lowercase());
    let kept: String = match mode {
        Normalization::Lowercase => folded,
        Normalization::Alphanumeric => folded
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace())
            .collect(),
    };
    collapse_whitespace(&kept)
}

#[cfg(feature = "unicode-normalization")]
fn fold(value: &str) -> String {
    value.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

#[cfg(not(feature = "unicode-normalization"))]
fn fold(value: &str) -> String {
    value.to_string()
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̈ (diaeresis), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Trim and collapse every whitespace run into a single space.
pub fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cache key for a raw query: trimmed, lowercased, whitespace collapsed.
///
/// Past the min-char gate, the search pipeline only ever sees this key, so two
/// queries with the same key produce the same ranking and highlight spans.
pub fn query_key(query: &str) -> String {
    collapse_whitespace(&query.to_lowercase())
}
