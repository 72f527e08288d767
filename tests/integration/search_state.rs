//! The search state reducer driven the way a front end drives it.

use crate::common::{
    make_record, news_catalog, scenario_catalog, titles, FailingSource, NEWS_CATALOG_JSON,
};
use bluom::{
    rank_with, Catalog, CatalogStore, JsonTextSource, ScoringPolicy, SearchAction, SearchState,
};

fn replaced(store: &CatalogStore) -> SearchAction {
    SearchAction::CatalogReplaced {
        state: store.state().clone(),
        revision: store.revision(),
    }
}

fn news_state(policy: ScoringPolicy) -> (CatalogStore, SearchState) {
    let mut store = CatalogStore::new();
    store.load(&JsonTextSource::new("news", NEWS_CATALOG_JSON));
    let state = SearchState::from_store(&store, policy);
    (store, state)
}

// ============================================================================
// TYPING
// ============================================================================

#[test]
fn test_keystrokes_rerank_each_time() {
    let (_, state) = news_state(ScoringPolicy::Log);

    let state = state.apply(SearchAction::QueryChanged("n".into()));
    let broad = state.result_count();

    let state = state.apply(SearchAction::QueryChanged("ne".into()));
    let state = state.apply(SearchAction::QueryChanged("new".into()));
    let state = state.apply(SearchAction::QueryChanged("new york".into()));

    assert!(state.result_count() < broad);
    assert_eq!(
        titles(state.results()),
        vec!["The New York Times - Breaking News, US News, World News and Videos"]
    );
}

#[test]
fn test_results_match_direct_ranking() {
    for policy in [ScoringPolicy::Log, ScoringPolicy::Linear] {
        let (_, state) = news_state(policy);
        let state = state.apply(SearchAction::QueryChanged("  News ".into()));
        assert_eq!(
            state.results(),
            rank_with("news", &news_catalog(), &policy).as_slice(),
            "policy {}",
            policy
        );
    }
}

#[test]
fn test_clearing_query_clears_results() {
    let (_, state) = news_state(ScoringPolicy::Log);
    let state = state.apply(SearchAction::QueryChanged("bbc".into()));
    assert_eq!(state.result_count(), 1);

    let state = state.apply(SearchAction::QueryChanged("   ".into()));
    assert_eq!(state.result_count(), 0);
    assert_eq!(state.normalized_query(), "");
}

#[test]
fn test_generation_counts_changes() {
    let (_, state) = news_state(ScoringPolicy::Log);
    let start = state.generation();
    let state = state
        .apply(SearchAction::QueryChanged("a".into()))
        .apply(SearchAction::QueryChanged("ab".into()))
        .apply(SearchAction::QueryDeferred("abc".into()));
    assert_eq!(state.generation(), start + 3);
}

// ============================================================================
// DEFERRED RANKING
// ============================================================================

#[test]
fn test_deferred_query_completes_through_request() {
    let (_, state) = news_state(ScoringPolicy::Log);
    let state = state.apply(SearchAction::QueryDeferred("Wikipedia".into()));
    assert!(state.is_pending());

    let request = state.ranking_request().expect("pending request");
    assert_eq!(request.generation, state.generation());
    assert_eq!(request.query, "wikipedia");

    let state = state.apply(request.run());
    assert!(!state.is_pending());
    assert!(state.ranking_request().is_none());
    assert_eq!(titles(state.results()), vec!["Wikipedia"]);
}

#[test]
fn test_slow_old_query_cannot_overwrite_newer_one() {
    let (_, state) = news_state(ScoringPolicy::Log);

    let state = state.apply(SearchAction::QueryDeferred("bbc".into()));
    let old = state.ranking_request().expect("bbc request");

    let state = state.apply(SearchAction::QueryDeferred("reuters".into()));
    let new = state.ranking_request().expect("reuters request");

    // The newer ranking finishes first, then the old one straggles in.
    let state = state.apply(new.run()).apply(old.run());

    assert_eq!(state.query(), "reuters");
    assert_eq!(titles(state.results()), vec!["Reuters"]);
    assert!(!state.is_pending());
}

#[test]
fn test_stale_completion_while_pending_is_ignored() {
    let (_, state) = news_state(ScoringPolicy::Log);

    let state = state.apply(SearchAction::QueryDeferred("bbc".into()));
    let old = state.ranking_request().expect("bbc request");
    let state = state.apply(SearchAction::QueryDeferred("guardian".into()));

    let state = state.apply(old.run());
    assert!(state.is_pending());
    assert_eq!(state.result_count(), 0);
}

#[test]
fn test_request_outlives_catalog_swap() {
    let (mut store, state) = news_state(ScoringPolicy::Log);
    let state = state.apply(SearchAction::QueryDeferred("bbc".into()));
    let request = state.ranking_request().expect("bbc request");

    store.replace(Catalog::new(scenario_catalog()));
    let state = state.apply(replaced(&store));

    // Ranked against the news catalog, but the catalog moved on.
    let state = state.apply(request.run());
    assert!(state.results().is_empty());
    assert!(!state.is_pending());
}

// ============================================================================
// CATALOG LIFECYCLE
// ============================================================================

#[test]
fn test_query_typed_before_catalog_arrives() {
    let mut store = CatalogStore::new();
    let state = SearchState::from_store(&store, ScoringPolicy::Log);
    assert!(state.is_loading());

    let state = state.apply(SearchAction::QueryChanged("hacker".into()));
    assert_eq!(state.result_count(), 0);

    store.load(&JsonTextSource::new("news", NEWS_CATALOG_JSON));
    let state = state.apply(replaced(&store));
    assert!(!state.is_loading());
    assert_eq!(titles(state.results()), vec!["Hacker News"]);
}

#[test]
fn test_catalog_swap_reranks_current_query() {
    let mut store = CatalogStore::new();
    store.replace(Catalog::new(scenario_catalog()));
    let state = SearchState::from_store(&store, ScoringPolicy::Log)
        .apply(SearchAction::QueryChanged("a".into()));
    assert_eq!(titles(state.results()), vec!["Alpha", "Beta"]);

    store.load(&JsonTextSource::new("news", NEWS_CATALOG_JSON));
    let state = state.apply(replaced(&store));
    assert_eq!(state.query(), "a");
    assert_eq!(
        state.results(),
        rank_with("a", &news_catalog(), &ScoringPolicy::Log).as_slice()
    );
}

#[test]
fn test_reload_of_same_contents_still_reranks() {
    let (mut store, state) = news_state(ScoringPolicy::Log);
    let state = state.apply(SearchAction::QueryChanged("news".into()));
    let before = state.results().to_vec();

    store.load(&JsonTextSource::new("news", NEWS_CATALOG_JSON));
    let state = state.apply(replaced(&store));
    assert_eq!(state.results(), before.as_slice());
}

#[test]
fn test_switching_between_stores_reranks() {
    let (news, state) = news_state(ScoringPolicy::Log);
    let state = state.apply(SearchAction::QueryChanged("news".into()));
    assert!(state.result_count() > 1);

    let mut local = CatalogStore::new();
    local.replace(Catalog::new(vec![
        make_record("Local News", Some(2)),
        make_record("Weather", Some(9)),
    ]));
    assert_eq!(local.revision(), news.revision());

    let state = state.apply(replaced(&local));
    assert_eq!(titles(state.results()), vec!["Local News"]);

    let state = state.apply(replaced(&news));
    assert_eq!(
        state.results(),
        rank_with("news", &news_catalog(), &ScoringPolicy::Log).as_slice()
    );
}

#[test]
fn test_load_failure_empties_results_and_reports() {
    let (mut store, state) = news_state(ScoringPolicy::Log);
    let state = state.apply(SearchAction::QueryChanged("news".into()));
    assert!(state.result_count() > 0);

    store.load(&FailingSource::new("connection refused"));
    let state = state.apply(replaced(&store));

    assert_eq!(state.result_count(), 0);
    let err = state.load_error().expect("failure recorded");
    assert!(err.to_string().contains("connection refused"));

    let state = state.apply(SearchAction::QueryChanged("bbc".into()));
    assert_eq!(state.result_count(), 0);
}

#[test]
fn test_policy_is_fixed_for_the_session() {
    let (_, log) = news_state(ScoringPolicy::Log);
    let (_, linear) = news_state(ScoringPolicy::Linear);
    let log = log.apply(SearchAction::QueryChanged("news".into()));
    let linear = linear.apply(SearchAction::QueryChanged("news".into()));

    assert_eq!(log.policy(), ScoringPolicy::Log);
    assert_eq!(linear.policy(), ScoringPolicy::Linear);
    assert_eq!(log.result_count(), linear.result_count());
}
