// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching primitives: typo tolerance over normalized text.
//!
//! Two scorers live here, one per [`crate::Algorithm`]: an approximate
//! substring alignment built on edit distance, and the in-order character walk
//! used by the subsequence scorer. Neither knows about thresholds or ranking;
//! they just turn `(candidate, pattern)` into a number.

mod levenshtein;
mod subsequence;

pub use levenshtein::*;
pub use subsequence::*;
