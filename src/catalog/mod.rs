// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The catalog store: the records being searched and whether they arrived.
//!
//! ```text
//!            load ok            reload ok / replace
//!   Empty ───────────▶ Loaded ◀─────────────────────┐
//!     │                  │                          │
//!     │ load err         │ reload err               │
//!     ▼                  ▼                          │
//!  LoadFailed ◀──────────┘──────────────────────────┘
//! ```
//!
//! Every load attempt ends in exactly one transition, and each transition
//! replaces the whole catalog. Ranking only ever reads [`CatalogState::records`],
//! which is empty unless the state is `Loaded`, so a missing or broken catalog
//! degrades to "no results" instead of an error.

mod error;
mod source;

pub use error::CatalogLoadError;
pub use source::{CatalogSource, JsonFileSource, JsonTextSource};

use crate::types::Record;
use crate::util::normalize::canonical_domain_url;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// An immutable, cheaply clonable list of records.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Arc<[Record]>,
    fingerprint: u32,
}

impl Catalog {
    pub fn new(records: Vec<Record>) -> Self {
        let fingerprint = fingerprint_records(&records);
        Catalog {
            records: records.into(),
            fingerprint,
        }
    }

    /// Parse a JSON array of record objects.
    pub fn from_json(payload: &[u8]) -> Result<Self, serde_json::Error> {
        let records: Vec<Record> = serde_json::from_slice(payload)?;
        Ok(Catalog::new(records))
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// CRC32 over record contents. Equal catalogs have equal fingerprints.
    pub fn fingerprint(&self) -> u32 {
        self.fingerprint
    }

    /// Aggregate statistics for inspection.
    pub fn summary(&self) -> CatalogSummary {
        let mut summary = CatalogSummary {
            records: self.len(),
            fingerprint: self.fingerprint,
            ..CatalogSummary::default()
        };
        let mut domains: BTreeMap<String, usize> = BTreeMap::new();

        for record in self.records.iter() {
            match record.links {
                Some(links) => {
                    summary.with_links += 1;
                    summary.total_links = summary.total_links.saturating_add(links);
                    summary.max_links = summary.max_links.max(links);
                }
                None => summary.without_links += 1,
            }
            if record.title.trim().is_empty() {
                summary.untitled += 1;
            }
            match canonical_domain_url(&record.url) {
                Some(domain) => *domains.entry(domain).or_default() += 1,
                None => summary.invalid_urls += 1,
            }
        }

        summary.duplicate_domains = domains.into_iter().filter(|(_, n)| *n > 1).collect();
        summary
    }
}

/// Content hash over every field, with separators so that field boundaries
/// cannot shift without changing the result.
fn fingerprint_records(records: &[Record]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    for record in records {
        hasher.update(record.url.as_bytes());
        hasher.update(&[0x1f]);
        hasher.update(record.title.as_bytes());
        hasher.update(&[0x1f]);
        hasher.update(record.description.as_bytes());
        hasher.update(&[0x1f]);
        match record.links {
            Some(links) => hasher.update(&links.to_le_bytes()),
            None => hasher.update(&[0xff]),
        }
        hasher.update(&[0x1e]);
    }
    hasher.finalize()
}

/// Catalog statistics for the `inspect` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSummary {
    pub records: usize,
    pub fingerprint: u32,
    pub with_links: usize,
    pub without_links: usize,
    pub total_links: u64,
    pub max_links: u64,
    pub untitled: usize,
    pub invalid_urls: usize,
    /// Canonical domains shared by more than one record, with their counts.
    pub duplicate_domains: Vec<(String, usize)>,
}

/// Lifecycle of the catalog.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    /// Nothing loaded yet.
    #[default]
    Empty,
    Loaded(Catalog),
    /// The last load attempt failed.
    LoadFailed(Arc<CatalogLoadError>),
}

impl CatalogState {
    /// Records visible to ranking. Empty unless loaded.
    pub fn records(&self) -> &[Record] {
        match self {
            CatalogState::Loaded(catalog) => catalog.records(),
            CatalogState::Empty | CatalogState::LoadFailed(_) => &[],
        }
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogState::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&CatalogLoadError> {
        match self {
            CatalogState::LoadFailed(err) => Some(err.as_ref()),
            _ => None,
        }
    }

    /// Owned handle on the failure, for callers that propagate it as an error.
    pub fn shared_error(&self) -> Option<Arc<CatalogLoadError>> {
        match self {
            CatalogState::LoadFailed(err) => Some(Arc::clone(err)),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, CatalogState::Loaded(_))
    }
}

/// Owns the current [`CatalogState`] and counts transitions.
///
/// The revision increases on every load attempt and replacement, so callers
/// can tell two states apart without comparing catalogs.
#[derive(Debug, Default)]
pub struct CatalogStore {
    state: CatalogState,
    revision: u64,
}

impl CatalogStore {
    pub fn new() -> Self {
        CatalogStore::default()
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn records(&self) -> &[Record] {
        self.state.records()
    }

    /// Perform one load attempt and move to `Loaded` or `LoadFailed`.
    ///
    /// Never fails: errors are captured in the new state.
    pub fn load<S>(&mut self, source: &S) -> &CatalogState
    where
        S: CatalogSource + ?Sized,
    {
        self.state = match source.fetch() {
            Ok(catalog) => {
                info!(
                    location = %source.location(),
                    records = catalog.len(),
                    fingerprint = %format!("{:08x}", catalog.fingerprint()),
                    "catalog loaded"
                );
                CatalogState::Loaded(catalog)
            }
            Err(err) => {
                warn!(location = %source.location(), error = %err, "catalog load failed");
                CatalogState::LoadFailed(Arc::new(err))
            }
        };
        self.revision += 1;
        &self.state
    }

    /// Swap in a whole new catalog.
    pub fn replace(&mut self, catalog: Catalog) -> &CatalogState {
        info!(records = catalog.len(), "catalog replaced");
        self.state = CatalogState::Loaded(catalog);
        self.revision += 1;
        &self.state
    }
}
