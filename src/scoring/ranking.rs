// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how accepted records get sorted.
//!
//! Sort order:
//! 1. **Score** - ascending for `Approximate`, descending for `Subsequence`
//! 2. **Corpus order** - the sort is stable, so equal scores keep the order
//!    the records had in the source column
//!
//! Truncation to `max_results` happens after sorting and is final; there is
//! no second page.

use crate::config::Algorithm;
use std::cmp::Ordering;

impl Algorithm {
    /// Order two scores best-first for this algorithm.
    ///
    /// Uses `total_cmp`, so the order is total even if a NaN sneaks in.
    #[inline]
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match self {
            Algorithm::Approximate => a.total_cmp(&b),
            Algorithm::Subsequence => b.total_cmp(&a),
        }
    }
}

/// Sort scored items best-first, then keep the first `limit`.
///
/// Items must arrive in corpus order; ties keep that order.
pub fn rank<T>(scored: &mut Vec<(T, f64)>, algorithm: Algorithm, limit: usize) {
    scored.sort_by(|(_, a), (_, b)| algorithm.compare(*a, *b));
    scored.truncate(limit);
}
