// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where catalogs come from.
//!
//! The catalog is produced elsewhere (a crawler writes a JSON array of
//! records) and only read here. A source either yields a complete [`Catalog`]
//! or an error; there is no partial result.

use super::{Catalog, CatalogLoadError};
use std::fs;
use std::path::{Path, PathBuf};

/// Anything that can produce a whole catalog in one attempt.
pub trait CatalogSource {
    /// Human-readable description of where the catalog is read from.
    fn location(&self) -> String;

    /// Perform one load attempt.
    fn fetch(&self) -> Result<Catalog, CatalogLoadError>;
}

/// A JSON catalog file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<Catalog, CatalogLoadError> {
        let bytes = fs::read(&self.path).map_err(|source| CatalogLoadError::Unreachable {
            location: self.location(),
            source,
        })?;
        Catalog::from_json(&bytes).map_err(|source| CatalogLoadError::Parse {
            location: self.location(),
            source,
        })
    }
}

/// A JSON catalog already held in memory.
#[derive(Debug, Clone)]
pub struct JsonTextSource {
    name: String,
    text: String,
}

impl JsonTextSource {
    pub fn new(name: &str, text: impl Into<String>) -> Self {
        JsonTextSource {
            name: name.to_string(),
            text: text.into(),
        }
    }
}

impl CatalogSource for JsonTextSource {
    fn location(&self) -> String {
        self.name.clone()
    }

    fn fetch(&self) -> Result<Catalog, CatalogLoadError> {
        Catalog::from_json(self.text.as_bytes()).map_err(|source| CatalogLoadError::Parse {
            location: self.location(),
            source,
        })
    }
}
