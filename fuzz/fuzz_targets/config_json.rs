// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for settings parsing.
//!
//! Any bytes may arrive as a settings object. Parsing returns an error or a
//! configuration that a matcher accepts, and never panics.

#![no_main]

use column_suggest::{Matcher, SearchConfig};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(config) = SearchConfig::from_json(json) {
        // INVARIANT: from_json only hands out validated configurations
        assert!(Matcher::new(config).is_ok());
    }
});
