// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use folio::build::load_catalog_with;
use folio::{LoadError, SearchConfig, SearchEngine, SearchSessionStore, WordMode};

mod cli;
use cli::display;
use cli::logging::{init_subscriber, Verbosity};
use cli::{Cli, Commands};

/// Exit status for a query with nothing searchable in it.
const EXIT_UNDETERMINED: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbosity = Verbosity::from_flags(cli.verbose, cli.quiet);
    init_subscriber(verbosity, cli.no_color);
    if cli.no_color {
        display::disable_colors();
    }
    let show_progress = verbosity != Verbosity::Quiet;

    let result = match cli.command {
        Commands::Search {
            catalog,
            mode,
            limit,
            json,
            config,
            query,
        } => run_search(&catalog, config.as_deref(), &query.join(" "), mode.into(), limit, json, show_progress),
        Commands::Inspect { catalog, config } => run_inspect(&catalog, config.as_deref(), show_progress),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SearchConfig, LoadError> {
    match path {
        Some(path) => SearchConfig::from_file(path),
        None => Ok(SearchConfig::default()),
    }
}

fn run_search(
    catalog_path: &Path,
    config_path: Option<&Path>,
    text: &str,
    mode: WordMode,
    limit: usize,
    json: bool,
    show_progress: bool,
) -> Result<ExitCode, LoadError> {
    let config = load_config(config_path)?;
    let catalog = load_catalog_with(catalog_path, &config, show_progress && !json)?;
    let engine = SearchEngine::with_config(&catalog, config);
    let mut store = SearchSessionStore::new();

    let outcome = engine.search(&mut store, text, mode);
    let Some((key, session)) = outcome.key().and_then(|key| store.get(key).map(|s| (key, s))) else {
        eprintln!("⚠️  Nothing searchable in {:?}", text);
        return Ok(ExitCode::from(EXIT_UNDETERMINED));
    };

    if json {
        match display::results_json(key, session, &catalog, limit) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("❌ Failed to serialize results: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        }
    } else {
        display::print_results(key, session, &session.resolve(&catalog), limit);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_inspect(catalog_path: &Path, config_path: Option<&Path>, show_progress: bool) -> Result<ExitCode, LoadError> {
    let config = load_config(config_path)?;
    let catalog = load_catalog_with(catalog_path, &config, show_progress)?;
    display::print_stats(&catalog.stats());
    eprintln!("✅ Catalog is consistent");
    Ok(ExitCode::SUCCESS)
}
