// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: from a partial query to ranked, highlighted suggestions.
//!
//! Everything culminates here. The pipeline for one query:
//!
//! ```text
//! trim ─▶ min-char gate ─▶ normalize ─▶ split words ─▶ score every record
//!      ─▶ threshold ─▶ sort (stable) ─▶ truncate ─▶ highlight survivors
//! ```
//!
//! Highlighting runs last, on at most `max_results` records, and only ever
//! looks at the original text.

pub mod cache;
pub mod highlight;

use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::error::Result;
use crate::index::CorpusIndex;
use crate::scoring::{ranking::rank, record_score};
use crate::types::{MatchResult, Record};
use crate::utils::{normalize, query_key};

pub use cache::CachedSearcher;
pub use highlight::{find_spans, query_terms, render_marked};

/// Stateless ranker over a [`CorpusIndex`].
///
/// Holds a validated configuration and nothing else, so the same matcher can
/// search any number of indexes, and the same call always gives the same answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Matcher {
    config: SearchConfig,
}

impl Matcher {
    /// Validate `config` and build a matcher around it.
    pub fn new(config: SearchConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            warn!(error = %err, "rejected search configuration");
            return Err(err);
        }
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Would `query` run at all, or is it below `min_char_required`?
    ///
    /// Callers use this to clear their suggestion list instead of searching.
    pub fn is_searchable(&self, query: &str) -> bool {
        query.trim().chars().count() >= self.config.min_char_required
    }

    /// Rank `index` against `query`.
    ///
    /// Returns at most `max_results` suggestions, best first. Zero matches is
    /// an empty vector, never an error. Queries below `min_char_required`, and
    /// queries that normalize to nothing, return an empty vector unscored.
    pub fn search(&self, index: &CorpusIndex, query: &str) -> Vec<MatchResult> {
        let trimmed = query.trim();
        if !self.is_searchable(trimmed) {
            return Vec::new();
        }

        // Past the gate, results depend only on the query key.
        let key = query_key(trimmed);
        let normalized = normalize(&key, index.normalization());
        let words: Vec<&str> = if self.config.tokenize {
            normalized.split_whitespace().collect()
        } else if normalized.is_empty() {
            Vec::new()
        } else {
            vec![normalized.as_str()]
        };
        if words.is_empty() {
            debug!(query = trimmed, "query normalized to nothing");
            return Vec::new();
        }

        let mut scored: Vec<(&Record, f64)> = index
            .records()
            .iter()
            .filter_map(|record| {
                record_score(&self.config, &record.normalized, &words).map(|score| (record, score))
            })
            .collect();
        let accepted = scored.len();
        rank(&mut scored, self.config.algorithm, self.config.max_results);

        debug!(
            query_chars = trimmed.chars().count(),
            words = words.len(),
            candidates = index.len(),
            accepted,
            returned = scored.len(),
            algorithm = ?self.config.algorithm,
            "search complete"
        );

        let terms = query_terms(&key, self.config.tokenize);
        scored
            .into_iter()
            .map(|(record, score)| MatchResult {
                record: record.id,
                original: record.original.clone(),
                score,
                spans: find_spans(&record.original, &terms),
            })
            .collect()
    }
}
