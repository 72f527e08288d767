// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for score calculation invariants.
//!
//! Scores must be finite, non-negative, and deterministic, whatever the
//! record contents and link counts. Link counts near `u64::MAX` are where
//! the authority term is most likely to misbehave.

#![no_main]

use arbitrary::Arbitrary;
use bluom::{score_record, Record, ScoringPolicy};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    url: String,
    title: String,
    description: String,
    links: Option<u64>,
    extra_links: u64,
}

fuzz_target!(|input: Input| {
    let query = bluom::normalize_query(&input.query);
    if query.is_empty() {
        return;
    }
    let record = Record::new(&input.url, &input.title, &input.description, input.links);

    for policy in [ScoringPolicy::Log, ScoringPolicy::Linear] {
        let first = score_record(&query, &record, &policy);
        let second = score_record(&query, &record, &policy);

        // INVARIANT 1: scoring is deterministic
        assert_eq!(first, second);

        let Some(score) = first else {
            continue;
        };

        // INVARIANT 2: scores are finite and non-negative
        assert!(score.is_finite(), "score {} is not finite", score);
        assert!(score >= 0.0, "score {} is negative", score);

        // INVARIANT 3: more links never lower the score
        let boosted = Record {
            links: Some(record.links.unwrap_or(0).saturating_add(input.extra_links)),
            ..record.clone()
        };
        if let Some(boosted_score) = score_record(&query, &boosted, &policy) {
            assert!(
                boosted_score >= score || record.links.is_none(),
                "score dropped from {} to {}",
                score,
                boosted_score
            );
        }
    }
});
