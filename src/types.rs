// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks: records, spans, and match results.
//!
//! # Invariants
//!
//! - **Record**: `id` is the record's position in the source column. Records
//!   are never dropped, so `index.records()[id] .id == id` always holds.
//!
//! - **Span**: `start < end`, measured in characters (Unicode scalar values) of
//!   the record's `original` text, never of its normalized form.
//!
//! - **MatchResult**: spans are sorted by `start` and never overlap, and every
//!   span satisfies `end <= original.chars().count()`.

use serde::{Deserialize, Serialize};

// =============================================================================
// NEWTYPES
// =============================================================================

/// Position of a record in the source column.
///
/// Callers map this back to the spreadsheet row, so it survives empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct RecordId(pub u32);

impl RecordId {
    /// Create a new RecordId, validating it's within bounds.
    #[inline]
    pub fn new(id: u32, num_records: usize) -> Option<Self> {
        if (id as usize) < num_records {
            Some(RecordId(id))
        } else {
            None
        }
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Convert to usize for array indexing.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for RecordId {
    fn from(id: u32) -> Self {
        RecordId(id)
    }
}

/// Fails for positions past `u32::MAX`.
impl TryFrom<usize> for RecordId {
    type Error = std::num::TryFromIntError;

    fn try_from(position: usize) -> Result<Self, Self::Error> {
        u32::try_from(position).map(RecordId)
    }
}

impl From<RecordId> for usize {
    fn from(id: RecordId) -> Self {
        id.0 as usize
    }
}

// =============================================================================
// RECORDS AND RESULTS
// =============================================================================

/// One searchable cell value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    /// Text exactly as supplied; what gets displayed and highlighted.
    pub original: String,
    /// Text after [`crate::normalize`]; what gets scored.
    pub normalized: String,
}

/// Half-open character range `[start, end)` into a record's original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "empty span {}..{}", start, end);
        Span { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// True if the two ranges share at least one character.
    #[inline]
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A record accepted by the matcher, with its score and highlight spans.
///
/// How to read `score` depends on the algorithm that produced it; see
/// [`crate::Algorithm`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub record: RecordId,
    pub original: String,
    pub score: f64,
    pub spans: Vec<Span>,
}

impl MatchResult {
    /// The highlighted fragments, in order. Spans outside the text are skipped.
    pub fn highlighted_fragments(&self) -> Vec<String> {
        let chars: Vec<char> = self.original.chars().collect();
        self.spans
            .iter()
            .filter_map(|span| chars.get(span.start..span.end))
            .map(|fragment| fragment.iter().collect())
            .collect()
    }
}
