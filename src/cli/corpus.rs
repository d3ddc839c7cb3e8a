// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a suggestion column from a file on disk.
//!
//! Three layouts are understood, picked by extension:
//!
//! - `.json`: an array of rows, each an array of cells. Strings are taken as-is,
//!   numbers and booleans are printed, `null` is an empty cell.
//! - `.tsv`: one row per line, cells separated by tabs.
//! - anything else: one value per line (a single-column sheet).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use column_suggest::column_values;

/// A raw table as read from disk; `None` is an empty cell.
pub type Rows = Vec<Vec<Option<String>>>;

fn cell(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

fn parse_json_rows(content: &str) -> Result<Rows> {
    let rows: Vec<Vec<Value>> =
        serde_json::from_str(content).context("expected a JSON array of rows (arrays of cells)")?;
    Ok(rows
        .into_iter()
        .map(|row| row.into_iter().map(cell).collect())
        .collect())
}

fn parse_delimited_rows(content: &str, delimiter: Option<char>) -> Rows {
    content
        .lines()
        .map(|line| match delimiter {
            Some(d) => line.split(d).map(|c| Some(c.to_string())).collect(),
            None => vec![Some(line.to_string())],
        })
        .collect()
}

/// Parse `content` according to the layout implied by `path`.
pub fn parse_rows(path: &Path, content: &str) -> Result<Rows> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => parse_json_rows(content),
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => Ok(parse_delimited_rows(content, Some('\t'))),
        _ => Ok(parse_delimited_rows(content, None)),
    }
}

/// Read `path` and extract the values of `column`.
pub fn load_column(path: &Path, column: usize, skip_header: bool) -> Result<Vec<Option<String>>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read corpus {}", path.display()))?;
    let rows = parse_rows(path, &content).with_context(|| format!("failed to parse {}", path.display()))?;
    let values = column_values(&rows, column, skip_header)?;
    tracing::info!(
        path = %path.display(),
        rows = rows.len(),
        column,
        values = values.len(),
        "loaded corpus"
    );
    Ok(values)
}
