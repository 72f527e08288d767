// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance ranking over a precomputed catalog of web domains.
//!
//! A crawler produces a catalog: one record per domain, with a title, a
//! description and a count of inbound links. This crate answers "which of
//! these records match what the user typed, and in what order?" It combines
//! literal substring matches on the text fields with a link-authority term.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  catalog/    │────▶│  search/     │────▶│  state.rs    │
//! │ (load, store,│     │ (rank, rank_ │     │ (SearchState,│
//! │  lifecycle)  │     │  with)       │     │  reduce)     │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │
//!          ┌──────────────────┼──────────────────┐
//!          ▼                                     ▼
//! ┌──────────────────┐                 ┌──────────────────┐
//! │ util/normalize   │                 │ scoring/         │
//! │ (query folding)  │                 │ (bonuses, policy,│
//! │                  │                 │  ordering)       │
//! └──────────────────┘                 └──────────────────┘
//! ```
//!
//! Rendering is not part of the library. The `bluom` binary is one front end:
//! it feeds queries through [`reduce`] and prints whatever the state holds.
//!
//! # Usage
//!
//! ```
//! use bluom::{rank_with, Record, ScoringPolicy};
//!
//! let catalog = vec![
//!     Record::new("https://a.com/", "Alpha", "", Some(5)),
//!     Record::new("https://b.com/", "Beta", "", Some(50)),
//! ];
//!
//! let log = rank_with("a", &catalog, &ScoringPolicy::Log);
//! assert_eq!(log[0].record.title, "Alpha");
//!
//! let linear = rank_with("a", &catalog, &ScoringPolicy::Linear);
//! assert_eq!(linear[0].record.title, "Beta");
//! ```

pub mod catalog;
pub mod scoring;
pub mod search;
pub mod state;
pub mod testing;
mod types;
pub mod util;

// Re-exports for public API
pub use catalog::{
    Catalog, CatalogLoadError, CatalogSource, CatalogState, CatalogStore, CatalogSummary,
    JsonFileSource, JsonTextSource,
};
pub use scoring::ranking::{compare_ranked, sort_ranked};
pub use scoring::{score_record, AuthorityPolicy, MatchFlags, ScoringPolicy};
pub use search::{rank, rank_normalized, rank_with};
pub use state::{reduce, RankingRequest, SearchAction, SearchState};
pub use types::{RankedRecord, Record};
pub use util::normalize::{canonical_domain_url, normalize_query};
