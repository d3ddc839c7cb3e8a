// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration: which algorithm, how strict, how many results.
//!
//! A `SearchConfig` is handed over once per session and never mutated while a
//! search runs. Changing settings means building a new `Matcher`.
//!
//! The JSON shape follows the widget settings object the host form sends,
//! so keys are camelCase (`maxResults`, `minCharRequired`, ...). Hosts tend to
//! deliver every setting as a string, so numbers and booleans are accepted in
//! either form. Keys this crate doesn't know about (placeholder text, sheet id,
//! widths) are ignored.

use std::path::Path;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SearchError};

/// Default acceptance threshold for the approximate algorithm.
pub const DEFAULT_APPROXIMATE_THRESHOLD: f64 = 0.4;

/// Default acceptance threshold for the subsequence algorithm.
pub const DEFAULT_SUBSEQUENCE_THRESHOLD: f64 = 0.2;

/// Default length/position tolerance, in characters.
pub const DEFAULT_DISTANCE: usize = 100;

pub const DEFAULT_MAX_RESULTS: usize = 5;

pub const DEFAULT_MIN_CHAR_REQUIRED: usize = 3;

/// Which scorer ranks the records.
///
/// The two scorers point in opposite directions, and that is part of the
/// contract:
///
/// | Algorithm     | Better score | Accepted when         | Order      |
/// |---------------|--------------|-----------------------|------------|
/// | `Approximate` | lower        | `score <= threshold`  | ascending  |
/// | `Subsequence` | higher       | `score > threshold`   | descending |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Edit-distance alignment of each query word against any substring of
    /// the record, plus a penalty for how far from `location` it starts.
    #[default]
    Approximate,
    /// In-order character walk rewarding contiguous runs, with a length
    /// mismatch penalty beyond `distance`.
    Subsequence,
}

/// How records and queries are folded before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// Lowercase, fold diacritics, collapse whitespace.
    Lowercase,
    /// `Lowercase`, then drop everything outside `[a-z0-9\s]`.
    #[default]
    Alphanumeric,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    #[serde(deserialize_with = "lenient_f64")]
    pub threshold: f64,
    /// Approximate: characters of drift from `location` that cost a full
    /// mismatch. Subsequence: tolerated length difference.
    #[serde(deserialize_with = "lenient_usize")]
    pub distance: usize,
    /// Where in the record an approximate match is expected to start.
    #[serde(deserialize_with = "lenient_usize")]
    pub location: usize,
    #[serde(deserialize_with = "lenient_usize")]
    pub max_results: usize,
    /// Queries shorter than this (in characters, after trimming) never search.
    #[serde(deserialize_with = "lenient_usize")]
    pub min_char_required: usize,
    /// Split the query on whitespace and score each word on its own.
    #[serde(deserialize_with = "lenient_bool")]
    pub tokenize: bool,
    /// With `tokenize`, require every word to match (otherwise any word).
    #[serde(deserialize_with = "lenient_bool")]
    pub match_all_tokens: bool,
    pub normalization: Normalization,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Approximate,
            threshold: DEFAULT_APPROXIMATE_THRESHOLD,
            distance: DEFAULT_DISTANCE,
            location: 0,
            max_results: DEFAULT_MAX_RESULTS,
            min_char_required: DEFAULT_MIN_CHAR_REQUIRED,
            tokenize: true,
            match_all_tokens: true,
            normalization: Normalization::Alphanumeric,
        }
    }
}

impl SearchConfig {
    /// Preset for the hand-rolled subsequence scorer: whole-query matching
    /// over lowercased text.
    pub fn subsequence() -> Self {
        Self {
            algorithm: Algorithm::Subsequence,
            threshold: DEFAULT_SUBSEQUENCE_THRESHOLD,
            tokenize: false,
            normalization: Normalization::Lowercase,
            ..Self::default()
        }
    }

    /// Parse and validate a settings object.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a settings file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| SearchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check the invariants a `Matcher` relies on; reports the first violation.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(SearchError::ThresholdOutOfRange {
                threshold: self.threshold,
            });
        }
        if self.algorithm == Algorithm::Subsequence && self.threshold >= 1.0 {
            return Err(SearchError::ThresholdRejectsAll {
                threshold: self.threshold,
            });
        }
        if self.max_results == 0 {
            return Err(SearchError::ZeroMaxResults);
        }
        Ok(())
    }
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| de::Error::custom("number out of range")),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| de::Error::custom(format!("expected a number, got {:?}", s))),
        other => Err(de::Error::custom(format!("expected a number, got {}", other))),
    }
}

fn lenient_usize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<usize, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| de::Error::custom(format!("expected a non-negative integer, got {}", n))),
        Value::String(s) => s.trim().parse().map_err(|_| {
            de::Error::custom(format!("expected a non-negative integer, got {:?}", s))
        }),
        other => Err(de::Error::custom(format!(
            "expected a non-negative integer, got {}",
            other
        ))),
    }
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Bool(b) => Ok(b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" | "" => Ok(false),
            _ => Err(de::Error::custom(format!("expected a boolean, got {:?}", s))),
        },
        other => Err(de::Error::custom(format!("expected a boolean, got {}", other))),
    }
}
