// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for catalog decoding.
//!
//! Arbitrary bytes go through the JSON catalog decoder. Decoding may fail,
//! but it must fail with an error, and anything it accepts must be usable.

#![no_main]

use bluom::{CatalogStore, JsonTextSource};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data).into_owned();
    let source = JsonTextSource::new("fuzz", text);

    let mut first = CatalogStore::new();
    let mut second = CatalogStore::new();
    first.load(&source);
    second.load(&source);

    // INVARIANT 1: a load always moves the store out of Empty
    assert_eq!(first.revision(), 1);
    assert!(first.state().is_loaded() || first.state().error().is_some());

    // INVARIANT 2: decoding is deterministic
    match (first.state().catalog(), second.state().catalog()) {
        (Some(a), Some(b)) => {
            assert_eq!(a.fingerprint(), b.fingerprint());
            assert_eq!(a, b);

            // INVARIANT 3: accepted catalogs summarise without panicking
            let summary = a.summary();
            assert_eq!(summary.records, a.len());
            assert_eq!(summary.with_links + summary.without_links, a.len());
        }
        (None, None) => assert!(first.records().is_empty()),
        _ => panic!("same payload decoded differently"),
    }
});
