// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures and invariant checks to avoid duplication.

#![doc(hidden)]

use crate::config::SearchConfig;
use crate::index::CorpusIndex;
use crate::types::MatchResult;

/// Job titles used by the ranking scenarios.
pub const JOB_TITLES: &[&str] = &["Software Engineer", "Senior Engineer", "Data Scientist"];

/// A config with a low character gate so short fixtures are searchable.
pub fn test_config(base: SearchConfig) -> SearchConfig {
    SearchConfig {
        min_char_required: 1,
        ..base
    }
}

/// Build an index with the normalization `config` expects.
pub fn index_for(config: &SearchConfig, values: &[&str]) -> CorpusIndex {
    CorpusIndex::build(values.iter().copied(), config.normalization)
}

/// Check the span invariants of every result; returns the first violation.
///
/// - `start < end <= chars(original)`
/// - sorted by start, non-overlapping
pub fn check_spans(results: &[MatchResult]) -> Result<(), String> {
    for result in results {
        let len = result.original.chars().count();
        let mut previous_end = 0;
        for (i, span) in result.spans.iter().enumerate() {
            if span.start >= span.end || span.end > len {
                return Err(format!(
                    "span {}..{} out of bounds for {:?} ({} chars)",
                    span.start, span.end, result.original, len
                ));
            }
            if i > 0 && span.start < previous_end {
                return Err(format!(
                    "span {}..{} overlaps or precedes previous end {} in {:?}",
                    span.start, span.end, previous_end, result.original
                ));
            }
            previous_end = span.end;
        }
    }
    Ok(())
}

/// The original texts of `results`, in rank order.
pub fn originals(results: &[MatchResult]) -> Vec<&str> {
    results.iter().map(|r| r.original.as_str()).collect()
}
