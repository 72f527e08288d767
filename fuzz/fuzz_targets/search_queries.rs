// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Throws arbitrary text at the ranking engine over a fixed catalog. Emoji,
//! combining marks, null bytes: none of it may panic, and every result must
//! really contain the query.

#![no_main]

use bluom::{normalize_query, rank_with, MatchFlags, Record, ScoringPolicy};
use libfuzzer_sys::fuzz_target;

fn catalog() -> Vec<Record> {
    vec![
        Record::new("https://wikipedia.org/", "Wikipedia", "The free encyclopedia", Some(214)),
        Record::new("https://bbc.com/", "BBC - Home", "News, sport and weather", Some(97)),
        Record::new("https://straße.example/", "Straße", "Größe und Maß", Some(4)),
        Record::new("https://emoji.example/", "🦀 Rust", "crabs 🦀🦀", None),
        Record::new("", "", "", None),
    ]
}

fuzz_target!(|query: &str| {
    static CATALOG: std::sync::OnceLock<Vec<Record>> = std::sync::OnceLock::new();
    let catalog = CATALOG.get_or_init(catalog);

    // Cap query length on a char boundary
    let end = query
        .char_indices()
        .nth(200)
        .map(|(i, _)| i)
        .unwrap_or(query.len());
    let query = &query[..end];
    let normalized = normalize_query(query);

    for policy in [ScoringPolicy::Log, ScoringPolicy::Linear] {
        let results = rank_with(query, catalog, &policy);

        // INVARIANT 1: empty queries match nothing
        if normalized.is_empty() {
            assert!(results.is_empty());
        }

        // INVARIANT 2: every result contains the query somewhere
        for r in &results {
            assert!(MatchFlags::evaluate(&normalized, &r.record).any());
        }

        // INVARIANT 3: results are sorted best first
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }
});
