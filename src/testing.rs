//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::catalog::{CatalogLoadError, CatalogSource};
use crate::types::Record;
use crate::Catalog;

/// Record with only a title and link count; url derived from the title.
pub fn make_record(title: &str, links: Option<u64>) -> Record {
    Record {
        url: format!("https://{}.example/", title.to_lowercase().replace(' ', "-")),
        title: title.to_string(),
        description: String::new(),
        links,
    }
}

/// The two-record catalog used throughout the ranking tests.
///
/// `Alpha` has few links, `Beta` has ten times as many.
pub fn scenario_catalog() -> Vec<Record> {
    vec![
        Record::new("https://a.com/", "Alpha", "", Some(5)),
        Record::new("https://b.com/", "Beta", "", Some(50)),
    ]
}

/// A data source that always fails, standing in for an unreachable server.
pub struct FailingSource {
    pub reason: String,
}

impl FailingSource {
    pub fn new(reason: &str) -> Self {
        FailingSource {
            reason: reason.to_string(),
        }
    }
}

impl CatalogSource for FailingSource {
    fn location(&self) -> String {
        "failing-source".to_string()
    }

    fn fetch(&self) -> Result<Catalog, CatalogLoadError> {
        Err(CatalogLoadError::Unavailable {
            location: self.location(),
            reason: self.reason.clone(),
        })
    }
}
