//! # Actions
//!
//! Everything that can happen in vidsearch becomes an `Action`.
//! Debounced typing settles? That's `Action::Search(term)`.
//! API responds? That's `Action::SearchCompleted { .. }`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` describing any I/O the
//! adapter must perform. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ## Search lifecycle
//!
//! ```text
//!            Search(term)                 SearchCompleted(id == latest)
//!  Empty ─────────────────▶ Loading ─────────────────────────────────▶ Loaded
//!                             │  ▲                                       │
//!                             │  └────────────── Search(term) ───────────┘
//!                             │ SearchFailed(id == latest)
//!                             ▼
//!                  previous results/selection kept, last_error set
//! ```
//!
//! Responses are tagged with the id of the request that produced them.
//! Only the most recently issued request may change the results, so a slow
//! response for an older term can never overwrite a newer one.

use log::{debug, info, warn};

use crate::core::state::App;
use crate::search::SearchResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Issue a search for the given term.
    Search(String),
    /// A search finished successfully.
    SearchCompleted {
        request_id: u64,
        results: Vec<SearchResult>,
    },
    /// A search failed (network, API, or parse error).
    SearchFailed { request_id: u64, error: String },
    /// The user picked a result from the list.
    SelectResult(SearchResult),
    Quit,
}

/// I/O requested by `update()`, carried out by the adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Run the provider for `term` and report back tagged with `request_id`.
    SpawnSearch { request_id: u64, term: String },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Search(term) => {
            app.latest_request += 1;
            app.is_loading = true;
            app.status_message = format!("Searching for \"{term}\"...");
            app.last_term = Some(term.clone());
            info!("Search #{} issued: {:?}", app.latest_request, term);
            Effect::SpawnSearch {
                request_id: app.latest_request,
                term,
            }
        }
        Action::SearchCompleted {
            request_id,
            results,
        } => {
            if request_id != app.latest_request {
                debug!(
                    "Dropping stale search #{} ({} results); latest is #{}",
                    request_id,
                    results.len(),
                    app.latest_request
                );
                return Effect::None;
            }
            info!("Search #{} completed with {} results", request_id, results.len());
            app.selected = results.first().cloned();
            app.status_message = match (&app.last_term, results.len()) {
                (Some(term), 0) => format!("No results for \"{term}\""),
                (Some(term), n) => format!("{n} results for \"{term}\""),
                (None, n) => format!("{n} results"),
            };
            app.results = results;
            app.is_loading = false;
            app.last_error = None;
            Effect::None
        }
        Action::SearchFailed { request_id, error } => {
            if request_id != app.latest_request {
                debug!(
                    "Ignoring failure of stale search #{}: {}",
                    request_id, error
                );
                return Effect::None;
            }
            warn!("Search #{} failed: {}", request_id, error);
            app.is_loading = false;
            app.status_message = String::from("Search failed");
            app.last_error = Some(error);
            Effect::None
        }
        Action::SelectResult(result) => {
            debug!("Selected video {}", result.id);
            app.selected = Some(result);
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_results, test_app};

    /// Issues a search and resolves it successfully, returning the request id.
    fn search_and_resolve(app: &mut App, term: &str, results: Vec<SearchResult>) -> u64 {
        let Effect::SpawnSearch { request_id, .. } = update(app, Action::Search(term.to_string()))
        else {
            panic!("Search should spawn a request");
        };
        update(app, Action::SearchCompleted { request_id, results });
        request_id
    }

    #[test]
    fn test_search_spawns_request_and_sets_loading() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Search("minions".to_string()));

        assert_eq!(
            effect,
            Effect::SpawnSearch {
                request_id: 1,
                term: "minions".to_string()
            }
        );
        assert!(app.is_loading);
        assert_eq!(app.latest_request, 1);
        assert_eq!(app.last_term.as_deref(), Some("minions"));
    }

    #[test]
    fn test_completed_search_replaces_results_and_selects_first() {
        let mut app = test_app();
        let results = sample_results("minions", 5);
        search_and_resolve(&mut app, "minions", results.clone());

        assert_eq!(app.results, results);
        assert_eq!(app.selected.as_ref(), Some(&results[0]));
        assert!(!app.is_loading);
        assert_eq!(app.status_message, "5 results for \"minions\"");
    }

    #[test]
    fn test_select_result_changes_selection_only() {
        let mut app = test_app();
        let results = sample_results("minions", 5);
        search_and_resolve(&mut app, "minions", results.clone());

        let effect = update(&mut app, Action::SelectResult(results[2].clone()));

        assert_eq!(effect, Effect::None);
        assert_eq!(app.selected.as_ref(), Some(&results[2]));
        assert_eq!(app.results, results);
    }

    #[test]
    fn test_new_search_replaces_results_and_resets_selection() {
        let mut app = test_app();
        let minions = sample_results("minions", 5);
        search_and_resolve(&mut app, "minions", minions.clone());
        update(&mut app, Action::SelectResult(minions[2].clone()));

        let cats = sample_results("cats", 3);
        search_and_resolve(&mut app, "cats", cats.clone());

        assert_eq!(app.results.len(), 3);
        assert_eq!(app.results, cats);
        assert_eq!(app.selected.as_ref(), Some(&cats[0]));
    }

    #[test]
    fn test_failed_search_leaves_state_unchanged() {
        let mut app = test_app();
        let minions = sample_results("minions", 5);
        search_and_resolve(&mut app, "minions", minions.clone());
        update(&mut app, Action::SelectResult(minions[1].clone()));

        let Effect::SpawnSearch { request_id, .. } =
            update(&mut app, Action::Search("cats".to_string()))
        else {
            panic!("Search should spawn a request");
        };
        update(
            &mut app,
            Action::SearchFailed {
                request_id,
                error: "network error: connection refused".to_string(),
            },
        );

        assert_eq!(app.results, minions);
        assert_eq!(app.selected.as_ref(), Some(&minions[1]));
        assert!(!app.is_loading);
        assert_eq!(
            app.last_error.as_deref(),
            Some("network error: connection refused")
        );
    }

    #[test]
    fn test_successful_search_clears_last_error() {
        let mut app = test_app();
        app.last_error = Some("old failure".to_string());
        search_and_resolve(&mut app, "cats", sample_results("cats", 2));
        assert!(app.last_error.is_none());
    }

    #[test]
    fn test_stale_response_does_not_overwrite_newer_search() {
        let mut app = test_app();

        let Effect::SpawnSearch { request_id: first, .. } =
            update(&mut app, Action::Search("min".to_string()))
        else {
            panic!("Search should spawn a request");
        };
        let Effect::SpawnSearch { request_id: second, .. } =
            update(&mut app, Action::Search("minions".to_string()))
        else {
            panic!("Search should spawn a request");
        };

        let newest = sample_results("minions", 4);
        update(
            &mut app,
            Action::SearchCompleted {
                request_id: second,
                results: newest.clone(),
            },
        );
        // The older request resolves late
        update(
            &mut app,
            Action::SearchCompleted {
                request_id: first,
                results: sample_results("min", 2),
            },
        );

        assert_eq!(app.results, newest);
        assert_eq!(app.selected.as_ref(), Some(&newest[0]));
    }

    #[test]
    fn test_stale_response_keeps_loading_flag() {
        let mut app = test_app();
        update(&mut app, Action::Search("a".to_string()));
        update(&mut app, Action::Search("ab".to_string()));

        update(
            &mut app,
            Action::SearchCompleted {
                request_id: 1,
                results: sample_results("a", 1),
            },
        );

        assert!(app.is_loading, "newer request is still in flight");
        assert!(app.results.is_empty());
    }

    #[test]
    fn test_stale_failure_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::Search("a".to_string()));
        update(&mut app, Action::Search("ab".to_string()));

        update(
            &mut app,
            Action::SearchFailed {
                request_id: 1,
                error: "timeout".to_string(),
            },
        );

        assert!(app.last_error.is_none());
        assert!(app.is_loading);
    }

    #[test]
    fn test_empty_response_clears_selection() {
        let mut app = test_app();
        search_and_resolve(&mut app, "minions", sample_results("minions", 5));
        search_and_resolve(&mut app, "zzzzqqq", Vec::new());

        assert!(app.results.is_empty());
        assert!(app.selected.is_none());
        assert_eq!(app.status_message, "No results for \"zzzzqqq\"");
    }

    #[test]
    fn test_select_result_is_not_validated_against_results() {
        let mut app = test_app();
        search_and_resolve(&mut app, "cats", sample_results("cats", 2));

        let outsider = sample_results("dogs", 1).remove(0);
        update(&mut app, Action::SelectResult(outsider.clone()));

        assert_eq!(app.selected, Some(outsider));
        assert_eq!(app.results.len(), 2);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
