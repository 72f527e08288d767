// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use bluom::{CatalogState, CatalogStore, JsonFileSource, SearchAction, SearchState};

mod cli;
use cli::display;
use cli::{CatalogArgs, Cli, Commands};

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            query,
            catalog,
            limit,
            json,
        } => run_search(&query, &catalog, limit, json),
        Commands::Interactive { catalog, limit } => run_interactive(&catalog, limit),
        Commands::Inspect { catalog } => run_inspect(&catalog),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr so `--json` output stays parseable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_store(path: &Path) -> CatalogStore {
    let mut store = CatalogStore::new();
    store.load(&JsonFileSource::new(path));
    store
}

/// Turn a failed catalog state into an error for the exit path.
///
/// The load error stays the source, so `{:#}` shows the io or parse cause too.
fn ensure_loaded(state: &CatalogState) -> Result<()> {
    match state.shared_error() {
        Some(err) => Err(anyhow::Error::new(err)).context("catalog unavailable"),
        None => Ok(()),
    }
}

fn run_search(query: &str, args: &CatalogArgs, limit: usize, json: bool) -> Result<()> {
    let store = load_store(&args.catalog);
    let state = SearchState::from_store(&store, args.scoring)
        .apply(SearchAction::QueryChanged(query.to_string()));

    if state.load_error().is_some() {
        if !json {
            display::load_failed_advisory();
        }
        return ensure_loaded(state.catalog());
    }

    if json {
        let payload = serde_json::json!({
            "query": state.query(),
            "scoring": state.policy().name(),
            "count": state.result_count(),
            "results": state.results(),
        });
        let out = serde_json::to_string_pretty(&payload).context("serialize results")?;
        println!("{}", out);
    } else {
        display::result_list(state.query(), state.results(), limit);
    }
    Ok(())
}

fn run_interactive(args: &CatalogArgs, limit: usize) -> Result<()> {
    let source = JsonFileSource::new(&args.catalog);
    let mut store = CatalogStore::new();
    store.load(&source);
    let mut state = SearchState::from_store(&store, args.scoring);
    if state.load_error().is_some() {
        display::load_failed_advisory();
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        eprint!("> ");
        io::stderr().flush().context("flush prompt")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("read query from stdin")?;

        match line.trim() {
            ":quit" | ":q" => break,
            ":reload" => {
                store.load(&source);
                state = state.apply(SearchAction::CatalogReplaced {
                    state: store.state().clone(),
                    revision: store.revision(),
                });
                match state.catalog() {
                    CatalogState::Loaded(catalog) => {
                        eprintln!("reloaded {} records", catalog.len());
                    }
                    _ => display::load_failed_advisory(),
                }
                continue;
            }
            _ => {}
        }

        state = state.apply(SearchAction::QueryChanged(line));
        if state.load_error().is_some() {
            display::load_failed_advisory();
        } else {
            display::result_list(state.query(), state.results(), limit);
        }
    }
    Ok(())
}

fn run_inspect(path: &Path) -> Result<()> {
    let store = load_store(path);
    match store.state() {
        CatalogState::Loaded(catalog) => {
            display::catalog_summary(&path.display().to_string(), &catalog.summary());
            Ok(())
        }
        state => {
            display::load_failed_advisory();
            ensure_loaded(state)
        }
    }
}
