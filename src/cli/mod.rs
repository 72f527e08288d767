// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the bluom command-line interface.
//!
//! Three subcommands: `search` ranks a catalog once for one query,
//! `interactive` reads queries line by line and re-ranks on each, and
//! `inspect` summarises a catalog file. The catalog path and scoring policy
//! can come from the environment so a shell session only sets them once.

pub mod display;

use bluom::ScoringPolicy;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bluom",
    about = "Search a web domain catalog by relevance and link authority",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the catalog lives and how to score it.
#[derive(Args, Clone, Debug)]
pub struct CatalogArgs {
    /// Catalog JSON file: an array of {url, title, description, links} objects
    #[arg(short, long, env = "BLUOM_CATALOG", default_value = "index.json")]
    pub catalog: PathBuf,

    /// How inbound link counts contribute to the score
    #[arg(
        short,
        long,
        env = "BLUOM_SCORING",
        value_enum,
        default_value_t = ScoringPolicy::Log
    )]
    pub scoring: ScoringPolicy,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the catalog against one query and print the results
    Search {
        /// Search query (matched case-insensitively as one substring)
        query: String,

        #[command(flatten)]
        catalog: CatalogArgs,

        /// Maximum number of results to display (0 = all)
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON instead of cards
        #[arg(long)]
        json: bool,
    },

    /// Read queries from stdin, one per line, re-ranking after each
    ///
    /// A line containing `:reload` reloads the catalog from disk; `:quit`
    /// or end of input exits.
    Interactive {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Maximum number of results to display per query (0 = all)
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Summarise a catalog file
    Inspect {
        /// Catalog JSON file
        #[arg(short, long, env = "BLUOM_CATALOG", default_value = "index.json")]
        catalog: PathBuf,
    },
}
