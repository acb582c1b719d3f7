//! YouTube Data API v3 search provider.
//!
//! Uses the `search.list` endpoint:
//! `GET {base_url}/search?part=snippet&type=video&q=...&key=...`
//!
//! The API's nested `id.videoId` / `snippet.*` shape is flattened into
//! [`SearchResult`] here so nothing else in the crate sees wire types.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Deserialize;

use crate::search::types::decode_entities;
use crate::search::{SearchError, SearchProvider, SearchRequest, SearchResult};

pub const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

// ============================================================================
// YouTube API Types
// ============================================================================

/// Response body of `search.list`
#[derive(Deserialize, Debug)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Deserialize, Debug)]
struct SearchItem {
    id: ItemId,
    snippet: Snippet,
}

/// Only video hits carry a `videoId`; channels and playlists don't.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct ItemId {
    #[serde(default)]
    video_id: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    channel_title: Option<String>,
    #[serde(default)]
    published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Deserialize, Debug, Default)]
struct Thumbnails {
    default: Option<Thumbnail>,
    medium: Option<Thumbnail>,
    high: Option<Thumbnail>,
}

#[derive(Deserialize, Debug)]
struct Thumbnail {
    url: String,
}

/// Google's error envelope: `{"error": {"code": 403, "message": "..."}}`
#[derive(Deserialize, Debug)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize, Debug)]
struct ErrorBody {
    message: String,
}

// ============================================================================
// Translation Layer
// ============================================================================

/// Converts one API item into a domain result. Returns None for non-video hits.
fn item_to_result(item: SearchItem) -> Option<SearchResult> {
    let Some(id) = item.id.video_id else {
        debug!("Skipping search item without videoId");
        return None;
    };

    let thumbnails = item.snippet.thumbnails;
    let thumbnail_url = thumbnails
        .default
        .or(thumbnails.medium)
        .or(thumbnails.high)
        .map(|t| t.url)
        .unwrap_or_default();

    Some(SearchResult {
        id,
        title: decode_entities(&item.snippet.title),
        description: decode_entities(&item.snippet.description),
        thumbnail_url,
        channel_title: item.snippet.channel_title.map(|c| decode_entities(&c)),
        published_at: item.snippet.published_at,
    })
}

/// Pulls the human-readable message out of an error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_string())
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// YouTube Data API search provider
pub struct YouTubeProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl YouTubeProvider {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_YOUTUBE_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl SearchProvider for YouTubeProvider {
    fn name(&self) -> &str {
        "youtube"
    }

    async fn search(&self, request: SearchRequest<'_>) -> Result<Vec<SearchResult>, SearchError> {
        if self.api_key.is_empty() {
            return Err(SearchError::Config("YouTube API key is empty".to_string()));
        }

        info!(
            "YouTube search request: term={:?}, max_results={}, order={}",
            request.term,
            request.max_results,
            request.order.as_param()
        );

        let max_results = request.max_results.to_string();
        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("key", self.api_key.as_str()),
                ("q", request.term),
                ("maxResults", max_results.as_str()),
                ("order", request.order.as_param()),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        debug!("YouTube response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("YouTube API error: {} - {}", status, err_body);
            return Err(SearchError::Api {
                status,
                message: error_message(&err_body),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;
        let parsed: SearchListResponse =
            serde_json::from_str(&body).map_err(|e| SearchError::Parse(e.to_string()))?;

        let results: Vec<SearchResult> = parsed.items.into_iter().filter_map(item_to_result).collect();
        info!("YouTube search returned {} results", results.len());
        Ok(results)
    }
}
