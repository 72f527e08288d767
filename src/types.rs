// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog search.
//!
//! A [`Record`] is one crawled domain as the loader hands it over. A
//! [`RankedRecord`] is that same record plus the score it earned for one query.
//! Records are never edited by the engine: matching happens on lower-cased
//! copies, and the display fields stay exactly as loaded.
//!
//! # Decoding rules
//!
//! Catalog payloads are produced by a crawler, not by hand, and individual
//! entries are often incomplete. Rather than rejecting a whole catalog over one
//! bad entry, fields decode with defaults:
//!
//! | Field         | Missing / `null` | Wrong type                     |
//! |---------------|------------------|--------------------------------|
//! | `url`         | `""`             | error (payload is not a catalog) |
//! | `title`       | `""`             | error                          |
//! | `description` | `""`             | error                          |
//! | `links`       | `None`           | `None` (negative, string, ...) |
//!
//! `None` links are resolved by the scoring policy, not here.

use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the catalog: a domain, its metadata, and its inbound link count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Inbound-link authority. `None` when the loader had no usable count.
    #[serde(
        default,
        deserialize_with = "lenient_links",
        skip_serializing_if = "Option::is_none"
    )]
    pub links: Option<u64>,
}

impl Record {
    pub fn new(url: &str, title: &str, description: &str, links: Option<u64>) -> Self {
        Record {
            url: url.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            links,
        }
    }
}

/// A record that matched a query, with the score it earned.
///
/// The score only orders results within one evaluation. Comparing scores from
/// two different queries means nothing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRecord {
    #[serde(flatten)]
    pub record: Record,
    pub score: f64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_links<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        _ => None,
    })
}
