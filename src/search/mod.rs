// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking engine: query in, ordered matches out.
//!
//! Every call recomputes from scratch over the whole catalog. There is no
//! index and no incremental state, so the cost is one linear pass plus a sort,
//! and the result depends only on `(query, catalog, policy)`.
//!
//! ```
//! use bluom::{rank, Record};
//!
//! let catalog = vec![
//!     Record::new("https://a.com/", "Alpha", "", Some(5)),
//!     Record::new("https://b.com/", "Beta", "", Some(50)),
//! ];
//!
//! let results = rank("alpha", &catalog);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].record.title, "Alpha");
//!
//! assert!(rank("   ", &catalog).is_empty());
//! ```

use crate::scoring::ranking::sort_ranked;
use crate::scoring::{score_record, AuthorityPolicy, ScoringPolicy};
use crate::types::{RankedRecord, Record};
use crate::util::normalize::normalize_query;

/// Rank `records` against a raw query using the canonical [`ScoringPolicy`].
pub fn rank(query: &str, records: &[Record]) -> Vec<RankedRecord> {
    rank_with(query, records, &ScoringPolicy::default())
}

/// Rank `records` against a raw query with an explicit authority policy.
///
/// The query is normalized first. An empty normalized query matches nothing
/// and returns before the catalog is looked at.
pub fn rank_with<P>(query: &str, records: &[Record], policy: &P) -> Vec<RankedRecord>
where
    P: AuthorityPolicy + ?Sized,
{
    let query = normalize_query(query);
    if query.is_empty() {
        return Vec::new();
    }
    rank_normalized(&query, records, policy)
}

/// Rank against a query that has already been through [`normalize_query`].
pub fn rank_normalized<P>(query: &str, records: &[Record], policy: &P) -> Vec<RankedRecord>
where
    P: AuthorityPolicy + ?Sized,
{
    if query.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<RankedRecord> = records
        .iter()
        .filter_map(|record| {
            score_record(query, record, policy).map(|score| RankedRecord {
                record: record.clone(),
                score,
            })
        })
        .collect();

    sort_ranked(&mut results);
    results
}
