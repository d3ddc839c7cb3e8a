//! Fuzzy autocomplete ranking over one spreadsheet column.
//!
//! A partial query goes in; a short, ranked list of suggestions comes out, each
//! with the character spans to emphasize when it's displayed. Fetching the
//! sheet, rendering the list and debouncing keystrokes are the caller's job.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌────────────────┐     ┌───────────────┐
//! │  config.rs   │────▶│   index.rs    │────▶│    search/     │────▶│ highlight.rs  │
//! │ (SearchConfig│     │ (CorpusIndex, │     │   (Matcher,    │     │ (find_spans,  │
//! │  Algorithm)  │     │ column_values)│     │ CachedSearcher)│     │ render_marked)│
//! └──────────────┘     └───────────────┘     └────────────────┘     └───────────────┘
//!                              │                     │
//!                              ▼                     ▼
//!                      ┌───────────────┐     ┌────────────────┐
//!                      │   utils.rs    │     │ scoring/ fuzzy/│
//!                      │  (normalize)  │     │ (accept, rank) │
//!                      └───────────────┘     └────────────────┘
//! ```
//!
//! # Choosing an algorithm
//!
//! | Algorithm     | Better score | Accepted when        | Order      | Default threshold |
//! |---------------|--------------|----------------------|------------|-------------------|
//! | `Approximate` | lower        | `score <= threshold` | ascending  | 0.4               |
//! | `Subsequence` | higher       | `score > threshold`  | descending | 0.2               |
//!
//! # Usage
//!
//! ```
//! use column_suggest::{CorpusIndex, Matcher, SearchConfig};
//!
//! let config = SearchConfig::default();
//! let index = CorpusIndex::build(
//!     ["Software Engineer", "Senior Engineer", "Data Scientist"],
//!     config.normalization,
//! );
//! let matcher = Matcher::new(config).unwrap();
//!
//! let results = matcher.search(&index, "engineer");
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].highlighted_fragments(), vec!["Engineer"]);
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
mod index;
pub mod scoring;
pub mod search;
mod types;
mod utils;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use config::{Algorithm, Normalization, SearchConfig};
pub use error::{Result, SearchError};
pub use fuzzy::{subsequence_score, substring_distances};
pub use index::{column_values, CorpusIndex};
pub use scoring::{approximate_score, record_score, word_score};
pub use search::{find_spans, query_terms, render_marked, CachedSearcher, Matcher};
pub use types::{MatchResult, Record, RecordId, Span};
pub use utils::{normalize, query_key};
