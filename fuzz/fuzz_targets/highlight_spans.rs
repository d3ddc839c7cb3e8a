// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for highlight spans.
//!
//! Lowercasing can turn one character into several ("İ" becomes "i̇"), which
//! is exactly where character offsets go wrong. Spans must stay inside the
//! original, sorted and disjoint, and rendering must not lose text.

#![no_main]

use arbitrary::Arbitrary;
use column_suggest::{find_spans, query_terms, render_marked};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct HighlightInput {
    text: String,
    query: String,
    tokenize: bool,
}

fuzz_target!(|input: HighlightInput| {
    let text: String = input.text.chars().take(200).collect();
    let query: String = input.query.chars().take(50).collect();

    let terms = query_terms(&query, input.tokenize);
    let spans = find_spans(&text, &terms);
    let len = text.chars().count();

    let mut previous_end = 0;
    for span in &spans {
        assert!(span.start < span.end, "empty span {:?}", span);
        assert!(span.end <= len, "span {:?} past {} chars", span, len);
        assert!(span.start >= previous_end, "overlapping span {:?}", span);
        previous_end = span.end;
    }

    // Rendering with empty markers gives back the original text
    assert_eq!(render_marked(&text, &spans, "", ""), text);
});
