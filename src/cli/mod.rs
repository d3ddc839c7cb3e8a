// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the column-suggest command-line interface.
//!
//! Three subcommands: `search` ranks one query against a column, `repl` reads
//! queries from stdin and answers each through the cached searcher, and
//! `inspect` shows how a column normalizes. Settings come from an optional
//! JSON file, then individual flags override it.

pub mod corpus;
pub mod display;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};

use column_suggest::{Algorithm, Normalization, SearchConfig};

#[derive(Parser)]
#[command(
    name = "column-suggest",
    about = "Fuzzy autocomplete suggestions from a spreadsheet column",
    version
)]
pub struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank suggestions for one query
    Search {
        #[command(flatten)]
        source: SourceArgs,

        /// The partial input to complete; multiple words are joined by spaces
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[command(flatten)]
        settings: SettingsArgs,

        /// Print results as JSON instead of highlighted text
        #[arg(long)]
        json: bool,
    },

    /// Answer queries read line by line from stdin
    Repl {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Show the records of a column and how they normalize
    Inspect {
        #[command(flatten)]
        source: SourceArgs,

        /// Normalization to preview
        #[arg(long, value_enum, default_value = "alphanumeric")]
        normalization: NormalizationArg,

        /// Maximum number of records to list
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

/// Where the suggestion column comes from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Corpus file: `.json` rows, `.tsv` rows, or one value per line
    pub corpus: PathBuf,

    /// Zero-based column holding the suggestions
    #[arg(long, default_value = "0")]
    pub column: usize,

    /// Treat the first row as a header
    #[arg(long)]
    pub skip_header: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SettingsArgs {
    /// JSON settings file (camelCase keys, same as the embedding widget)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub algorithm: Option<AlgorithmArg>,

    /// Acceptance threshold in [0, 1]
    #[arg(long)]
    pub threshold: Option<f64>,

    #[arg(long)]
    pub distance: Option<usize>,

    /// Expected match position for the approximate algorithm
    #[arg(long)]
    pub location: Option<usize>,

    /// Maximum number of suggestions
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Queries shorter than this return nothing
    #[arg(long)]
    pub min_chars: Option<usize>,

    /// Score the query as a single pattern instead of per word
    #[arg(long)]
    pub no_tokenize: bool,

    /// Accept records matching any query word instead of all
    #[arg(long)]
    pub any_token: bool,

    #[arg(long, value_enum)]
    pub normalization: Option<NormalizationArg>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmArg {
    Approximate,
    Subsequence,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Approximate => Algorithm::Approximate,
            AlgorithmArg::Subsequence => Algorithm::Subsequence,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationArg {
    Lowercase,
    Alphanumeric,
}

impl From<NormalizationArg> for Normalization {
    fn from(arg: NormalizationArg) -> Self {
        match arg {
            NormalizationArg::Lowercase => Normalization::Lowercase,
            NormalizationArg::Alphanumeric => Normalization::Alphanumeric,
        }
    }
}

impl SettingsArgs {
    /// Resolve the final configuration: file (or preset), then flags.
    ///
    /// Without a file, `--algorithm subsequence` starts from the subsequence
    /// preset so its threshold and normalization defaults apply. Validation
    /// happens when the matcher is built.
    pub fn resolve(&self) -> Result<SearchConfig> {
        let mut config = match (&self.config, self.algorithm) {
            (Some(path), _) => SearchConfig::from_path(path)?,
            (None, Some(AlgorithmArg::Subsequence)) => SearchConfig::subsequence(),
            (None, _) => SearchConfig::default(),
        };

        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm.into();
        }
        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(distance) = self.distance {
            config.distance = distance;
        }
        if let Some(location) = self.location {
            config.location = location;
        }
        if let Some(limit) = self.limit {
            config.max_results = limit;
        }
        if let Some(min_chars) = self.min_chars {
            config.min_char_required = min_chars;
        }
        if let Some(normalization) = self.normalization {
            config.normalization = normalization.into();
        }
        if self.no_tokenize {
            config.tokenize = false;
        }
        if self.any_token {
            config.match_all_tokens = false;
        }

        tracing::debug!(?config, "resolved search configuration");
        Ok(config)
    }
}
