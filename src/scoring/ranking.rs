// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how matched records get sorted.
//!
//! Highest score first. That is the whole comparator, with no secondary key.
//! Ties are resolved by the caller using a stable sort, so records with equal
//! scores come out in catalog order.

use crate::types::RankedRecord;
use std::cmp::Ordering;

/// Compare two ranked records: higher score sorts first.
///
/// Must be used with a stable sort (`sort_by`, not `sort_unstable_by`).
/// Incomparable scores are treated as equal so they keep input order.
pub fn compare_ranked(a: &RankedRecord, b: &RankedRecord) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Stable in-place sort by descending score.
pub fn sort_ranked(results: &mut [RankedRecord]) {
    results.sort_by(compare_ranked);
}
