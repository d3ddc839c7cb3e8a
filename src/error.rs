// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error values returned across the core's entry points.
//!
//! Only configuration problems are errors. A query that matches nothing is a
//! successful, empty search, and a row without the target column becomes an
//! empty record instead of failing the whole corpus.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong before a search runs.
#[derive(Debug, Error)]
pub enum SearchError {
    /// `threshold` is NaN, infinite, or outside `[0, 1]`.
    #[error("threshold {threshold} is outside [0, 1]")]
    ThresholdOutOfRange { threshold: f64 },

    /// Subsequence scores never exceed 1.0, so `score > 1.0` accepts nothing.
    #[error("threshold {threshold} rejects every record for the subsequence algorithm")]
    ThresholdRejectsAll { threshold: f64 },

    #[error("maxResults must be at least 1")]
    ZeroMaxResults,

    /// The configured column does not exist in the source rows.
    #[error("column index {column} is out of bounds for rows of width {width}")]
    ColumnOutOfBounds { column: usize, width: usize },

    /// Settings JSON could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SearchError {
    /// True for errors caused by the caller's settings rather than the environment.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, SearchError::Io { .. })
    }
}

pub type Result<T, E = SearchError> = std::result::Result<T, E>;
