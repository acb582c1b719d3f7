use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

const EMBED_BASE_URL: &str = "https://www.youtube.com/embed";

/// One video returned by a search.
///
/// Values are immutable once received from a provider: the app replaces
/// whole result lists rather than editing entries in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Opaque video identifier (YouTube `videoId`)
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub channel_title: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl SearchResult {
    /// Embeddable player URL derived from the video id.
    pub fn embed_url(&self) -> String {
        format!("{EMBED_BASE_URL}/{}", self.id)
    }
}

/// Ordering requested from the search API.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum SearchOrder {
    #[default]
    Relevance,
    Date,
    Rating,
    Title,
    ViewCount,
}

impl SearchOrder {
    /// Value of the `order` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            SearchOrder::Relevance => "relevance",
            SearchOrder::Date => "date",
            SearchOrder::Rating => "rating",
            SearchOrder::Title => "title",
            SearchOrder::ViewCount => "viewCount",
        }
    }

    /// Returns a human-readable label for display
    pub fn label(self) -> &'static str {
        match self {
            SearchOrder::Relevance => "Relevance",
            SearchOrder::Date => "Newest",
            SearchOrder::Rating => "Rating",
            SearchOrder::Title => "Title",
            SearchOrder::ViewCount => "Views",
        }
    }
}

/// Decodes the handful of HTML entities the YouTube API leaves in snippets.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        // Must run last so "&amp;lt;" decodes to "&lt;", not "<"
        .replace("&amp;", "&")
}
