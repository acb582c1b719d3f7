//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::search::{SearchError, SearchProvider, SearchRequest, SearchResult};

/// A provider that answers every search with a fixed outcome.
pub struct CannedProvider {
    pub outcome: Result<Vec<SearchResult>, SearchError>,
}

#[async_trait]
impl SearchProvider for CannedProvider {
    fn name(&self) -> &str {
        "canned"
    }

    async fn search(&self, _request: SearchRequest<'_>) -> Result<Vec<SearchResult>, SearchError> {
        self.outcome.clone()
    }
}

/// Builds `count` distinct results whose ids and titles are derived from `term`.
pub fn sample_results(term: &str, count: usize) -> Vec<SearchResult> {
    (0..count)
        .map(|i| SearchResult {
            id: format!("{term}-{i}"),
            title: format!("{term} video {i}"),
            description: format!("Description of {term} video {i}"),
            thumbnail_url: format!("https://i.ytimg.com/vi/{term}-{i}/default.jpg"),
            channel_title: Some(format!("{term} channel")),
            published_at: None,
        })
        .collect()
}

/// Creates a test App backed by a provider that returns no results.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(CannedProvider {
        outcome: Ok(Vec::new()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchOrder;

    #[test]
    fn test_canned_provider_returns_outcome() {
        let provider = CannedProvider {
            outcome: Ok(sample_results("cats", 3)),
        };
        let request = SearchRequest {
            term: "cats",
            max_results: 5,
            order: SearchOrder::Relevance,
        };
        let results = tokio_test::block_on(provider.search(request)).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].id, "cats-0");
    }
}
