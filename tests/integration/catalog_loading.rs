//! Catalog loading from disk, failure states, and reloads.

use crate::common::{news_catalog, titles, FailingSource, NEWS_CATALOG_JSON};
use bluom::{
    rank, Catalog, CatalogLoadError, CatalogState, CatalogStore, JsonFileSource, JsonTextSource,
};
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn catalog_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write catalog");
    file.flush().expect("flush catalog");
    file
}

// ============================================================================
// SUCCESSFUL LOADS
// ============================================================================

#[test]
fn test_load_catalog_from_file() {
    let file = catalog_file(NEWS_CATALOG_JSON);
    let mut store = CatalogStore::new();

    let state = store.load(&JsonFileSource::new(file.path()));
    assert!(state.is_loaded());
    assert_eq!(store.records(), news_catalog().as_slice());
    assert_eq!(store.revision(), 1);
}

#[test]
fn test_loaded_catalog_ranks() {
    let file = catalog_file(NEWS_CATALOG_JSON);
    let mut store = CatalogStore::new();
    store.load(&JsonFileSource::new(file.path()));

    let results = rank("guardian", store.records());
    assert_eq!(
        titles(&results),
        vec!["News, sport and opinion from the Guardian's global edition | The Guardian"]
    );
}

#[test]
fn test_file_and_text_sources_agree() {
    let file = catalog_file(NEWS_CATALOG_JSON);
    let mut from_file = CatalogStore::new();
    let mut from_text = CatalogStore::new();
    from_file.load(&JsonFileSource::new(file.path()));
    from_text.load(&JsonTextSource::new("inline", NEWS_CATALOG_JSON));

    let a = from_file.state().catalog().expect("file catalog");
    let b = from_text.state().catalog().expect("text catalog");
    assert_eq!(a.fingerprint(), b.fingerprint());
    assert_eq!(a, b);
}

#[test]
fn test_empty_array_is_a_valid_catalog() {
    let file = catalog_file("[]");
    let mut store = CatalogStore::new();
    assert!(store.load(&JsonFileSource::new(file.path())).is_loaded());
    assert!(store.records().is_empty());
    assert!(rank("anything", store.records()).is_empty());
}

#[test]
fn test_news_catalog_summary() {
    let catalog = Catalog::new(news_catalog());
    let summary = catalog.summary();

    assert_eq!(summary.records, 6);
    assert_eq!(summary.with_links, 5);
    assert_eq!(summary.without_links, 1);
    assert_eq!(summary.total_links, 214 + 97 + 61 + 58 + 3);
    assert_eq!(summary.max_links, 214);
    assert_eq!(summary.untitled, 0);
    assert_eq!(summary.invalid_urls, 0);
    assert!(summary.duplicate_domains.is_empty());
}

#[test]
fn test_summary_reports_duplicate_domains() {
    let json = r#"[
        {"url": "https://example.com/", "title": "Example"},
        {"url": "https://www.example.com/", "title": "Example again"},
        {"url": "not a url", "title": ""}
    ]"#;
    let summary = Catalog::from_json(json.as_bytes()).expect("parses").summary();

    assert_eq!(summary.duplicate_domains, vec![("https://example.com/".to_string(), 2)]);
    assert_eq!(summary.invalid_urls, 1);
    assert_eq!(summary.untitled, 1);
}

// ============================================================================
// FAILED LOADS
// ============================================================================

#[test]
fn test_missing_file_is_unreachable() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("index.json");
    let mut store = CatalogStore::new();

    let state = store.load(&JsonFileSource::new(&path));
    match state.error() {
        Some(CatalogLoadError::Unreachable { location, .. }) => {
            assert_eq!(location, &path.display().to_string());
        }
        other => panic!("expected unreachable, got {:?}", other),
    }
    assert!(store.records().is_empty());
}

#[test]
fn test_malformed_file_is_parse_error() {
    let file = catalog_file("{\"not\": \"a list\"}");
    let mut store = CatalogStore::new();

    store.load(&JsonFileSource::new(file.path()));
    assert!(matches!(
        store.state().error(),
        Some(CatalogLoadError::Parse { .. })
    ));
}

#[test]
fn test_truncated_file_is_parse_error() {
    let cut = &NEWS_CATALOG_JSON[..NEWS_CATALOG_JSON.len() / 2];
    let file = catalog_file(cut);
    let mut store = CatalogStore::new();

    store.load(&JsonFileSource::new(file.path()));
    assert!(matches!(
        store.state(),
        CatalogState::LoadFailed(err) if matches!(**err, CatalogLoadError::Parse { .. })
    ));
}

#[test]
fn test_failed_load_ranks_nothing() {
    let mut store = CatalogStore::new();
    store.load(&FailingSource::new("503 Service Unavailable"));

    assert!(matches!(store.state(), CatalogState::LoadFailed(_)));
    assert!(rank("wikipedia", store.records()).is_empty());
}

#[test]
fn test_load_error_message_names_location() {
    let mut store = CatalogStore::new();
    store.load(&FailingSource::new("offline"));

    let err = store.state().error().expect("load failed");
    assert_eq!(err.location(), "failing-source");
    assert!(err.to_string().contains("offline"));
}

// ============================================================================
// RELOADS
// ============================================================================

#[test]
fn test_reload_picks_up_new_contents() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("index.json");
    let source = JsonFileSource::new(&path);
    let mut store = CatalogStore::new();

    fs::write(&path, r#"[{"url": "https://a.com/", "title": "Alpha", "links": 5}]"#)
        .expect("write first catalog");
    store.load(&source);
    let first = store.state().catalog().expect("first load").fingerprint();

    fs::write(&path, NEWS_CATALOG_JSON).expect("write second catalog");
    store.load(&source);
    let second = store.state().catalog().expect("second load").fingerprint();

    assert_ne!(first, second);
    assert_eq!(store.records().len(), 6);
    assert_eq!(store.revision(), 2);
}

#[test]
fn test_failed_reload_discards_previous_catalog() {
    let file = catalog_file(NEWS_CATALOG_JSON);
    let mut store = CatalogStore::new();
    store.load(&JsonFileSource::new(file.path()));
    assert_eq!(store.records().len(), 6);

    store.load(&FailingSource::new("offline"));
    assert!(store.records().is_empty());
    assert_eq!(store.revision(), 2);
}

#[test]
fn test_recovery_after_failed_load() {
    let file = catalog_file(NEWS_CATALOG_JSON);
    let mut store = CatalogStore::new();
    store.load(&FailingSource::new("offline"));
    store.load(&JsonFileSource::new(file.path()));

    assert!(store.state().is_loaded());
    assert_eq!(titles(&rank("reuters", store.records())), vec!["Reuters"]);
}
