use std::fmt;

use async_trait::async_trait;

use super::types::{SearchOrder, SearchResult};

/// Errors that can occur while running a search.
/// None of them are retried; the caller logs and reports them.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Provider misconfigured (missing API key, bad URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// API returned an error response.
    Api { status: u16, message: String },
    /// Failed to parse the provider's response.
    Parse(String),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Config(msg) => write!(f, "config error: {msg}"),
            SearchError::Network(msg) => write!(f, "network error: {msg}"),
            SearchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SearchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Everything a provider needs to fulfill a search.
pub struct SearchRequest<'a> {
    pub term: &'a str,
    pub max_results: u32,
    pub order: SearchOrder,
}

#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Returns the name of the provider.
    fn name(&self) -> &str;

    /// Runs one search. Results come back in the provider's ranking order.
    async fn search(&self, request: SearchRequest<'_>) -> Result<Vec<SearchResult>, SearchError>;
}
