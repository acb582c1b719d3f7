use vidsearch::search::{SearchError, SearchOrder, SearchProvider, SearchRequest, YouTubeProvider};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn provider_for(server: &MockServer) -> YouTubeProvider {
    YouTubeProvider::new("test-key".to_string(), Some(server.uri()))
}

fn request(term: &str) -> SearchRequest<'_> {
    SearchRequest {
        term,
        max_results: 5,
        order: SearchOrder::Relevance,
    }
}

fn video_item(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "kind": "youtube#searchResult",
        "id": { "kind": "youtube#video", "videoId": id },
        "snippet": {
            "publishedAt": "2015-06-12T16:00:01Z",
            "title": title,
            "description": format!("About {title}"),
            "channelTitle": "Illumination",
            "thumbnails": {
                "default": { "url": format!("https://i.ytimg.com/vi/{id}/default.jpg") },
                "medium": { "url": format!("https://i.ytimg.com/vi/{id}/mqdefault.jpg") }
            }
        }
    })
}

// ============================================================================
// Success Path
// ============================================================================

#[tokio::test]
async fn test_search_maps_items_in_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "kind": "youtube#searchListResponse",
            "items": [
                video_item("abc123", "Minions &amp; Friends"),
                video_item("def456", "Banana"),
            ]
        })))
        .mount(&mock_server)
        .await;

    let results = provider_for(&mock_server)
        .search(request("minions"))
        .await
        .unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "abc123");
    assert_eq!(results[0].title, "Minions & Friends");
    assert_eq!(results[0].description, "About Minions & Friends");
    assert_eq!(results[0].thumbnail_url, "https://i.ytimg.com/vi/abc123/default.jpg");
    assert_eq!(results[0].channel_title.as_deref(), Some("Illumination"));
    assert!(results[0].published_at.is_some());
    assert_eq!(results[0].embed_url(), "https://www.youtube.com/embed/abc123");
    assert_eq!(results[1].id, "def456");
}

#[tokio::test]
async fn test_search_sends_expected_query_params() {
    let mock_server = MockServer::start().await;

    // Only matches when every parameter is present
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("part", "snippet"))
        .and(query_param("type", "video"))
        .and(query_param("key", "test-key"))
        .and(query_param("q", "surfing cats"))
        .and(query_param("maxResults", "10"))
        .and(query_param("order", "viewCount"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [video_item("cat1", "Surfing cat")]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let results = provider_for(&mock_server)
        .search(SearchRequest {
            term: "surfing cats",
            max_results: 10,
            order: SearchOrder::ViewCount,
        })
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
}

#[tokio::test]
async fn test_search_with_no_items_returns_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "kind": "youtube#searchListResponse",
            "items": []
        })))
        .mount(&mock_server)
        .await;

    let results = provider_for(&mock_server)
        .search(request("zzzzqqqq"))
        .await
        .unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_search_skips_items_without_video_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [
                {
                    "id": { "kind": "youtube#channel", "channelId": "UC123" },
                    "snippet": { "title": "A channel" }
                },
                video_item("vid1", "A video"),
            ]
        })))
        .mount(&mock_server)
        .await;

    let results = provider_for(&mock_server)
        .search(request("minions"))
        .await
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "vid1");
}

// ============================================================================
// Error Handling
// ============================================================================

#[tokio::test]
async fn test_search_api_error_uses_envelope_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": {
                "code": 403,
                "message": "The request cannot be completed because you have exceeded your quota."
            }
        })))
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server)
        .search(request("minions"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        SearchError::Api {
            status: 403,
            message: "The request cannot be completed because you have exceeded your quota."
                .to_string(),
        }
    );
}

#[tokio::test]
async fn test_search_api_error_with_plain_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server)
        .search(request("minions"))
        .await
        .unwrap_err();

    match err {
        SearchError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_malformed_json_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
        .mount(&mock_server)
        .await;

    let err = provider_for(&mock_server)
        .search(request("minions"))
        .await
        .unwrap_err();
    assert!(matches!(err, SearchError::Parse(_)));
}

#[tokio::test]
async fn test_search_empty_api_key_is_config_error() {
    let mock_server = MockServer::start().await;

    // No request should reach the server
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let provider = YouTubeProvider::new(String::new(), Some(mock_server.uri()));
    let err = provider.search(request("minions")).await.unwrap_err();
    assert!(matches!(err, SearchError::Config(_)));
}
