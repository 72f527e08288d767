// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text normalization for matching.
//!
//! Matching is literal, case-insensitive substring containment without
//! tokenization or diacritic stripping: "café" does not match "cafe". Both sides go through [`fold_case`], so whatever folding applies to
//! a query applies identically to the fields it is compared against.

use url::Url;

/// Reduce raw user input to the key the ranking engine matches with.
///
/// Trims surrounding whitespace and lower-cases. Interior whitespace is kept
/// as typed, since the query is matched as one literal substring.
///
/// An empty result means "match nothing".
///
/// # Example
///
/// ```
/// use bluom::normalize_query;
///
/// assert_eq!(normalize_query("  Wikipedia "), "wikipedia");
/// assert_eq!(normalize_query("   "), "");
/// ```
pub fn normalize_query(raw: &str) -> String {
    fold_case(raw.trim())
}

/// Lower-cased copy of a record field.
#[inline]
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Canonical `https://<host>/` form of a URL, with a leading `www.` dropped.
///
/// Two records whose URLs differ only in scheme, path, case or the `www.`
/// prefix collapse to the same canonical form. Returns `None` for input that
/// does not parse as an absolute URL or has no host.
pub fn canonical_domain_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?.to_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(host.as_str());
    if host.is_empty() {
        return None;
    }
    Some(format!("https://{}/", host))
}
