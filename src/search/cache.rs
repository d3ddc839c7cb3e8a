// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query memoization bound to one corpus index.
//!
//! Autocomplete users retype the same prefixes constantly (backspace, retype),
//! so remembering recent answers is worthwhile. The cache is purely an
//! optimization: every answer it returns is exactly what [`Matcher::search`]
//! would return for the same index and query.
//!
//! **Invariant**: cached results always belong to the current index and the
//! current configuration. Replacing either clears the cache.
//!
//! Keys are [`query_key`]s (trimmed, lowercased, whitespace collapsed).
//! [`Matcher::search`] scores and highlights from that same key, so queries
//! sharing a key share an answer. Eviction is first-in, first-out.

use indexmap::IndexMap;
use tracing::trace;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::index::CorpusIndex;
use crate::search::Matcher;
use crate::types::MatchResult;
use crate::utils::query_key;

/// How many distinct queries are remembered by default.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

/// A [`Matcher`] and the [`CorpusIndex`] it searches, plus memoized answers.
#[derive(Debug, Clone)]
pub struct CachedSearcher {
    matcher: Matcher,
    index: CorpusIndex,
    cache: IndexMap<String, Vec<MatchResult>>,
    capacity: Option<usize>,
    hits: u64,
    misses: u64,
}

impl CachedSearcher {
    /// Bounded cache with [`DEFAULT_CACHE_CAPACITY`] entries.
    pub fn new(matcher: Matcher, index: CorpusIndex) -> Self {
        Self::with_capacity(matcher, index, Some(DEFAULT_CACHE_CAPACITY))
    }

    /// `None` means unbounded.
    pub fn with_capacity(matcher: Matcher, index: CorpusIndex, capacity: Option<usize>) -> Self {
        Self {
            matcher,
            index,
            cache: IndexMap::new(),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Build both halves from a configuration and raw column values.
    pub fn from_values<I, S>(config: SearchConfig, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let index = CorpusIndex::build(values, config.normalization);
        Ok(Self::new(Matcher::new(config)?, index))
    }

    /// Same contract as [`Matcher::search`].
    pub fn search(&mut self, query: &str) -> &[MatchResult] {
        if !self.matcher.is_searchable(query) {
            return &[];
        }

        let key = query_key(query);
        if self.cache.contains_key(&key) {
            self.hits += 1;
            trace!(key = %key, "search cache hit");
        } else {
            self.misses += 1;
            trace!(key = %key, "search cache miss");
            let results = self.matcher.search(&self.index, query);
            self.cache.insert(key.clone(), results);
            self.evict();
        }

        self.cache.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replace the corpus; every cached answer is dropped.
    pub fn rebuild<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalization = self.matcher.config().normalization;
        self.replace_index(CorpusIndex::build(values, normalization));
    }

    pub fn replace_index(&mut self, index: CorpusIndex) {
        self.index = index;
        self.clear();
    }

    /// Swap in a new configuration wholesale; every cached answer is dropped.
    ///
    /// On error the previous configuration and cache stay in place.
    pub fn set_config(&mut self, config: SearchConfig) -> Result<()> {
        let matcher = Matcher::new(config)?;
        if matcher.config().normalization != self.index.normalization() {
            let values: Vec<String> = self.index.records().iter().map(|r| r.original.clone()).collect();
            self.index = CorpusIndex::build(values, matcher.config().normalization);
        }
        self.matcher = matcher;
        self.clear();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    fn evict(&mut self) {
        if let Some(capacity) = self.capacity {
            while self.cache.len() > capacity {
                self.cache.shift_remove_index(0);
            }
        }
    }

    #[inline]
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    #[inline]
    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    /// Number of memoized queries.
    #[inline]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    #[inline]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}
