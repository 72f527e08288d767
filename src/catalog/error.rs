// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io;
use thiserror::Error;

/// Why a catalog load attempt failed.
///
/// Always recovered at the store boundary: the store moves to
/// [`CatalogState::LoadFailed`](super::CatalogState::LoadFailed) and ranking
/// sees an empty catalog. Nothing here is fatal.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The data source could not be read at all.
    #[error("could not read catalog from {location}: {source}")]
    Unreachable { location: String, source: io::Error },

    /// The payload was read but is not a list of record objects.
    #[error("catalog at {location} is not a list of records: {source}")]
    Parse {
        location: String,
        source: serde_json::Error,
    },

    /// The source refused the request (non-success status, offline, ...).
    #[error("catalog source {location} is unavailable: {reason}")]
    Unavailable { location: String, reason: String },
}

impl CatalogLoadError {
    /// Where the failed load was reading from.
    pub fn location(&self) -> &str {
        match self {
            CatalogLoadError::Unreachable { location, .. }
            | CatalogLoadError::Parse { location, .. }
            | CatalogLoadError::Unavailable { location, .. } => location,
        }
    }
}
