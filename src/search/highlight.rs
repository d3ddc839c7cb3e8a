// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlight spans: which characters of the display text to emphasize.
//!
//! This is a separate, literal pass over the *original* text. It doesn't care
//! which fuzzy algorithm accepted the record or where the alignment landed.
//! Each query word is searched case-insensitively, left to right, and every
//! non-overlapping occurrence becomes a span. A record that only matched
//! fuzzily gets no spans at all.
//!
//! Offsets are characters of the original, so "É" in "Émile" is one position
//! even though it is two bytes.

use crate::types::Span;
use crate::utils::query_key;

/// Lowercased literal terms to highlight for a raw query.
///
/// Terms come from the query's [`query_key`], so queries that differ only in
/// case or spacing highlight the same way. Tokenized: one term per word.
/// Otherwise the whole key is one term. Empty terms are dropped.
pub fn query_terms(query: &str, tokenize: bool) -> Vec<Vec<char>> {
    let key = query_key(query);
    if key.is_empty() {
        Vec::new()
    } else if tokenize {
        key.split(' ').map(|word| word.chars().collect()).collect()
    } else {
        vec![key.chars().collect()]
    }
}

/// Find highlight spans for `terms` in `text`.
///
/// Returned spans are sorted and non-overlapping. Occurrences of different
/// terms that overlap are merged into one span.
pub fn find_spans(text: &str, terms: &[Vec<char>]) -> Vec<Span> {
    if terms.is_empty() || text.is_empty() {
        return Vec::new();
    }

    // Each original character lowercases to one or more characters; matching
    // on these chunks keeps offsets in original-character units.
    let lowered: Vec<Vec<char>> = text.chars().map(|c| c.to_lowercase().collect()).collect();

    let mut spans: Vec<Span> = terms
        .iter()
        .filter(|term| !term.is_empty())
        .flat_map(|term| literal_occurrences(&lowered, term))
        .collect();
    merge_overlapping(&mut spans);
    spans
}

/// Sequential scan: after a hit, resume right after it.
fn literal_occurrences(lowered: &[Vec<char>], needle: &[char]) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut start = 0;
    while start < lowered.len() {
        match match_len(lowered, start, needle) {
            Some(len) => {
                spans.push(Span::new(start, start + len));
                start += len;
            }
            None => start += 1,
        }
    }
    spans
}

/// Number of original characters covered if `needle` matches at `start`.
fn match_len(lowered: &[Vec<char>], start: usize, needle: &[char]) -> Option<usize> {
    let mut consumed = 0;
    let mut pos = start;
    while consumed < needle.len() {
        let chunk = lowered.get(pos)?;
        let rest = &needle[consumed..];
        if rest.len() < chunk.len() || rest[..chunk.len()] != chunk[..] {
            return None;
        }
        consumed += chunk.len();
        pos += 1;
    }
    (pos > start).then_some(pos - start)
}

fn merge_overlapping(spans: &mut Vec<Span>) {
    spans.sort();
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans.drain(..) {
        match merged.last_mut() {
            Some(last) if span.start < last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    *spans = merged;
}

/// Wrap every span of `text` in `open`/`close` markers.
///
/// `render_marked("Senior Engineer", &spans, "<mark>", "</mark>")` gives
/// `"Senior <mark>Engineer</mark>"`. Text is not escaped; callers rendering
/// HTML must escape the original themselves.
pub fn render_marked(text: &str, spans: &[Span], open: &str, close: &str) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * (open.len() + close.len()));
    let mut spans = spans.iter().peekable();
    let mut current_end: Option<usize> = None;

    for (idx, c) in text.chars().enumerate() {
        if current_end == Some(idx) {
            out.push_str(close);
            current_end = None;
        }
        if current_end.is_none() {
            if let Some(span) = spans.next_if(|span| span.start == idx) {
                out.push_str(open);
                current_end = Some(span.end);
            }
        }
        out.push(c);
    }
    if current_end.is_some() {
        out.push_str(close);
    }
    out
}
