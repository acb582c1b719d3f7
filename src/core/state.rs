//! # Application State
//!
//! Core business state for vidsearch. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── provider: Arc<dyn SearchProvider>  // search backend
//! ├── results: Vec<SearchResult>         // latest result list, API order
//! ├── selected: Option<SearchResult>     // video shown in the detail panel
//! ├── max_results: u32                   // page size requested per search
//! ├── order: SearchOrder                 // ranking requested per search
//! ├── is_loading: bool                   // a search is in flight
//! ├── latest_request: u64                // id of the most recently issued search
//! ├── last_term: Option<String>          // term of the most recently issued search
//! ├── last_error: Option<String>         // failure of the latest search, if any
//! └── status_message: String             // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::search::{SearchOrder, SearchProvider, SearchResult};

pub struct App {
    pub provider: Arc<dyn SearchProvider>,
    pub results: Vec<SearchResult>,
    pub selected: Option<SearchResult>,
    pub max_results: u32,
    pub order: SearchOrder,
    pub is_loading: bool,
    /// Monotonic id of the last search issued. Responses carrying any other id are stale.
    pub latest_request: u64,
    pub last_term: Option<String>,
    pub last_error: Option<String>,
    pub status_message: String,
}

impl App {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            provider,
            results: Vec::new(),
            selected: None,
            max_results: crate::core::config::DEFAULT_MAX_RESULTS,
            order: SearchOrder::default(),
            is_loading: false,
            latest_request: 0,
            last_term: None,
            last_error: None,
            status_message: String::from("Type to search"),
        }
    }

    pub fn from_config(provider: Arc<dyn SearchProvider>, config: &ResolvedConfig) -> Self {
        Self {
            max_results: config.max_results,
            order: config.order,
            ..Self::new(provider)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.results.is_empty());
        assert!(app.selected.is_none());
        assert!(!app.is_loading);
        assert_eq!(app.latest_request, 0);
        assert_eq!(app.status_message, "Type to search");
    }
}
