// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search state as a value, advanced by a pure reducer.
//!
//! The front end owns one [`SearchState`] and replaces it with
//! `reduce(&state, action)` whenever something happens: a keystroke, a
//! finished catalog load. It never mutates results in place. The state carries
//! everything a view needs: the catalog lifecycle, the query as typed, and the
//! ranked results for it.
//!
//! # Query generations
//!
//! Each query change or catalog swap bumps `generation`. Ranking can run
//! inline ([`SearchAction::QueryChanged`]) or be handed off
//! ([`SearchAction::QueryDeferred`] + [`SearchState::ranking_request`]); a
//! handed-off result comes back as [`SearchAction::RankingCompleted`] tagged
//! with the generation it was computed for. Anything not tagged with the
//! current generation is dropped, so a slow old query can never overwrite the
//! results of a newer one.
//!
//! # Memoization
//!
//! The state remembers which `(normalized query, catalog epoch)` its results
//! belong to. Typing a trailing space, for example, changes the raw query but
//! not the normalized one, and the previous results are reused. This is purely
//! a shortcut; recomputing would give the same list.
//!
//! The epoch is counted by the reducer itself and advances on every
//! [`SearchAction::CatalogReplaced`]. The store revision carried by that
//! action belongs to whichever store sent it, so two stores can report the
//! same number for different catalogs; it never decides a memo hit.

use crate::catalog::{CatalogLoadError, CatalogState, CatalogStore};
use crate::scoring::ScoringPolicy;
use crate::search::rank_normalized;
use crate::types::RankedRecord;
use crate::util::normalize::normalize_query;
use std::sync::Arc;
use tracing::debug;

/// What the current results were computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RankingKey {
    query: String,
    catalog_epoch: u64,
}

/// Immutable snapshot of catalog, query and results.
#[derive(Debug, Clone)]
pub struct SearchState {
    catalog: CatalogState,
    catalog_epoch: u64,
    query: String,
    normalized: String,
    generation: u64,
    ranked: Arc<[RankedRecord]>,
    ranked_key: Option<RankingKey>,
    policy: ScoringPolicy,
}

impl Default for SearchState {
    fn default() -> Self {
        SearchState::new(ScoringPolicy::default())
    }
}

/// Something that happened, for [`reduce`] to fold into the state.
#[derive(Debug, Clone)]
pub enum SearchAction {
    /// New raw query; rank immediately.
    QueryChanged(String),
    /// New raw query; ranking will arrive later as `RankingCompleted`.
    QueryDeferred(String),
    /// The catalog store moved to a new state. `revision` is informational.
    CatalogReplaced { state: CatalogState, revision: u64 },
    /// Results computed outside the reducer.
    RankingCompleted {
        generation: u64,
        query: String,
        catalog_epoch: u64,
        ranked: Arc<[RankedRecord]>,
    },
}

/// Everything needed to rank one generation away from the state.
///
/// Holds its own handle on the catalog, so it stays valid if the state moves on.
#[derive(Debug, Clone)]
pub struct RankingRequest {
    pub generation: u64,
    pub query: String,
    catalog: CatalogState,
    catalog_epoch: u64,
    policy: ScoringPolicy,
}

impl RankingRequest {
    /// Rank and wrap the result as an action for the reducer.
    pub fn run(&self) -> SearchAction {
        let ranked = rank_normalized(&self.query, self.catalog.records(), &self.policy);
        SearchAction::RankingCompleted {
            generation: self.generation,
            query: self.query.clone(),
            catalog_epoch: self.catalog_epoch,
            ranked: ranked.into(),
        }
    }
}

impl SearchState {
    pub fn new(policy: ScoringPolicy) -> Self {
        SearchState {
            catalog: CatalogState::Empty,
            catalog_epoch: 0,
            query: String::new(),
            normalized: String::new(),
            generation: 0,
            ranked: Arc::from(Vec::new()),
            ranked_key: None,
            policy,
        }
    }

    /// Start from whatever the store currently holds.
    pub fn from_store(store: &CatalogStore, policy: ScoringPolicy) -> Self {
        reduce(
            &SearchState::new(policy),
            SearchAction::CatalogReplaced {
                state: store.state().clone(),
                revision: store.revision(),
            },
        )
    }

    /// Shorthand for `reduce(self, action)`.
    pub fn apply(&self, action: SearchAction) -> SearchState {
        reduce(self, action)
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    /// The query exactly as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn normalized_query(&self) -> &str {
        &self.normalized
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Ranked results, best first.
    pub fn results(&self) -> &[RankedRecord] {
        &self.ranked
    }

    pub fn result_count(&self) -> usize {
        self.ranked.len()
    }

    /// No catalog has arrived yet.
    pub fn is_loading(&self) -> bool {
        matches!(self.catalog, CatalogState::Empty)
    }

    pub fn load_error(&self) -> Option<&CatalogLoadError> {
        self.catalog.error()
    }

    /// The visible results are not for the current query yet.
    pub fn is_pending(&self) -> bool {
        self.ranked_key.as_ref() != Some(&self.current_key())
    }

    /// Work order for the current generation, if its results are outstanding.
    pub fn ranking_request(&self) -> Option<RankingRequest> {
        if !self.is_pending() {
            return None;
        }
        Some(RankingRequest {
            generation: self.generation,
            query: self.normalized.clone(),
            catalog: self.catalog.clone(),
            catalog_epoch: self.catalog_epoch,
            policy: self.policy,
        })
    }

    fn current_key(&self) -> RankingKey {
        RankingKey {
            query: self.normalized.clone(),
            catalog_epoch: self.catalog_epoch,
        }
    }

    fn set_query(&mut self, raw: String) {
        self.normalized = normalize_query(&raw);
        self.query = raw;
        self.generation += 1;
    }

    fn refresh(&mut self) {
        let key = self.current_key();
        if self.ranked_key.as_ref() == Some(&key) {
            debug!(query = %key.query, "reusing ranked results");
            return;
        }
        self.ranked = rank_normalized(&key.query, self.catalog.records(), &self.policy).into();
        self.ranked_key = Some(key);
    }
}

/// Fold one action into the state, returning the next state.
pub fn reduce(state: &SearchState, action: SearchAction) -> SearchState {
    let mut next = state.clone();
    match action {
        SearchAction::QueryChanged(raw) => {
            next.set_query(raw);
            next.refresh();
        }
        SearchAction::QueryDeferred(raw) => {
            next.set_query(raw);
        }
        SearchAction::CatalogReplaced { state, revision } => {
            debug!(revision, epoch = next.catalog_epoch + 1, "catalog replaced");
            next.catalog = state;
            next.catalog_epoch += 1;
            next.generation += 1;
            next.refresh();
        }
        SearchAction::RankingCompleted {
            generation,
            query,
            catalog_epoch,
            ranked,
        } => {
            if generation != state.generation {
                debug!(
                    generation,
                    current = state.generation,
                    "dropping stale ranking"
                );
                return next;
            }
            next.ranked = ranked;
            next.ranked_key = Some(RankingKey {
                query,
                catalog_epoch,
            });
        }
    }
    next
}
