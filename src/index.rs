// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus index construction.
//!
//! Normalization is paid once here instead of once per keystroke. The index
//! is immutable after `build`; rebuilding produces a new value.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSITIONAL**: one record per input entry, `records[i].id == i`.
//!    Empty or missing cells become empty records instead of being dropped.
//! 2. **ORIGINAL_VERBATIM**: `original` is the input, byte for byte.
//! 3. **SAME_NORMALIZATION**: queries searched against this index must be
//!    normalized with `index.normalization()`.

use tracing::debug;

use crate::config::Normalization;
use crate::error::{Result, SearchError};
use crate::types::{Record, RecordId};
use crate::utils::normalize;

/// The searchable form of one spreadsheet column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusIndex {
    records: Vec<Record>,
    normalization: Normalization,
}

impl CorpusIndex {
    /// Build an index from raw cell values. Pure and deterministic.
    pub fn build<I, S>(values: I, normalization: Normalization) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_optional(values.into_iter().map(Some), normalization)
    }

    /// Build an index where `None` marks an undefined cell.
    ///
    /// Undefined cells become empty records so that `RecordId` keeps pointing
    /// at the same row as the source. At most `u32::MAX + 1` rows are indexed.
    pub fn build_optional<I, S>(values: I, normalization: Normalization) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let records: Vec<Record> = values
            .into_iter()
            .enumerate()
            .map_while(|(position, value)| {
                let id = RecordId::try_from(position).ok()?;
                let original: &str = match &value {
                    Some(v) => v.as_ref(),
                    None => "",
                };
                Some(Record {
                    id,
                    original: original.to_string(),
                    normalized: normalize(original, normalization),
                })
            })
            .collect();

        debug!(
            records = records.len(),
            empty = records.iter().filter(|r| r.original.is_empty()).count(),
            ?normalization,
            "built corpus index"
        );

        Self {
            records,
            normalization,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[inline]
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.get(id.as_usize())
    }

    #[inline]
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }
}

/// Pull one column out of a table of rows.
///
/// The first row decides the table width; `column` past it is a configuration
/// error. Rows that are too short, or whose cell is `None`, yield `None` so the
/// record survives as an empty string. With `skip_header`, the first row is
/// treated as column labels and left out of the result.
///
/// An empty table is an empty column, not an error.
pub fn column_values(
    rows: &[Vec<Option<String>>],
    column: usize,
    skip_header: bool,
) -> Result<Vec<Option<String>>> {
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };
    if column >= first.len() {
        return Err(SearchError::ColumnOutOfBounds {
            column,
            width: first.len(),
        });
    }

    let body = if skip_header { &rows[1..] } else { rows };
    Ok(body
        .iter()
        .map(|row| row.get(column).cloned().flatten())
        .collect())
}
