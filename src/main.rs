// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use column_suggest::{CachedSearcher, CorpusIndex, Matcher, Normalization, SearchConfig};

mod cli;
use cli::corpus::load_column;
use cli::display::{self, section_bot, section_top, themed, GRAY};
use cli::{Cli, Commands, SettingsArgs, SourceArgs};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = match cli.command {
        Commands::Search {
            source,
            query,
            settings,
            json,
        } => run_search(&source, &query.join(" "), &settings, json),
        Commands::Repl { source, settings } => run_repl(&source, &settings),
        Commands::Inspect {
            source,
            normalization,
            limit,
        } => run_inspect(&source, normalization.into(), limit),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_searcher(source: &SourceArgs, config: SearchConfig) -> Result<CachedSearcher> {
    let values = load_column(&source.corpus, source.column, source.skip_header)?;
    let index = CorpusIndex::build_optional(values, config.normalization);
    Ok(CachedSearcher::new(Matcher::new(config)?, index))
}

fn run_search(source: &SourceArgs, query: &str, settings: &SettingsArgs, json: bool) -> Result<()> {
    let config = settings.resolve()?;
    let algorithm = config.algorithm;
    let mut searcher = load_searcher(source, config)?;

    if !searcher.matcher().is_searchable(query) {
        tracing::warn!(
            min_chars = searcher.matcher().config().min_char_required,
            "query is shorter than the minimum, nothing to suggest"
        );
    }
    let results = searcher.search(query);

    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        display::print_suggestions(results, algorithm);
    }
    Ok(())
}

fn run_repl(source: &SourceArgs, settings: &SettingsArgs) -> Result<()> {
    let config = settings.resolve()?;
    let algorithm = config.algorithm;
    let mut searcher = load_searcher(source, config)?;

    eprintln!(
        "{}",
        themed(
            GRAY,
            &[],
            &format!(
                "{} records loaded. Type a query per line, Ctrl-D to quit.",
                searcher.index().len()
            )
        )
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        display::print_suggestions(searcher.search(&line), algorithm);
        stdout.flush()?;
    }

    tracing::info!(
        hits = searcher.hits(),
        misses = searcher.misses(),
        cached = searcher.len(),
        "repl finished"
    );
    Ok(())
}

fn run_inspect(source: &SourceArgs, normalization: Normalization, limit: usize) -> Result<()> {
    let values = load_column(&source.corpus, source.column, source.skip_header)?;
    let index = CorpusIndex::build_optional(values, normalization);
    let empty = index.records().iter().filter(|r| r.normalized.is_empty()).count();

    section_top("CORPUS");
    display::row(&format!(" file           {}", source.corpus.display()));
    display::row(&format!(" column         {}", source.column));
    display::row(&format!(" records        {}", index.len()));
    display::row(&format!(" unsearchable   {}", empty));
    display::row(&format!(" normalization  {:?}", normalization));
    section_bot();

    section_top("RECORDS");
    for record in index.records().iter().take(limit) {
        display::row(&format!(
            " {:>5}  {}  {}",
            record.id.get(),
            record.original,
            themed(GRAY, &[], &format!("→ {:?}", record.normalized))
        ));
    }
    if index.len() > limit {
        display::row(&themed(GRAY, &[], &format!(" … {} more", index.len() - limit)));
    }
    section_bot();
    Ok(())
}
