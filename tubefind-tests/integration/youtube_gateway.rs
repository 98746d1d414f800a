//! Gateway + YouTube provider against the stub API.

use axum::http::StatusCode;
use serde_json::json;
use tubefind_search::{ErrorKind, SearchError, SearchResult};

use crate::support::{StubReply, StubYoutube, youtube_gateway, youtube_item, youtube_response};

#[tokio::test]
async fn test_cats_search_returns_items_in_order() {
    let stub = StubYoutube::new(StubReply::Body(youtube_response(vec![
        youtube_item("aaa111", "Cat A"),
        youtube_item("bbb222", "Cat B"),
    ])));
    let gateway = youtube_gateway(stub.spawn().await, Some("test-key"));

    let results = gateway.search("cats").await.unwrap();

    assert_eq!(
        results,
        vec![
            SearchResult {
                title: "Cat A".to_string(),
                video_id: "aaa111".to_string(),
                thumbnail_url: "https://i.ytimg.com/vi/aaa111/hqdefault.jpg".to_string(),
                channel_title: "Cat A channel".to_string(),
                description: "Cat A description".to_string(),
            },
            SearchResult {
                title: "Cat B".to_string(),
                video_id: "bbb222".to_string(),
                thumbnail_url: "https://i.ytimg.com/vi/bbb222/hqdefault.jpg".to_string(),
                channel_title: "Cat B channel".to_string(),
                description: "Cat B description".to_string(),
            },
        ]
    );

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["q"], "cats");
    assert_eq!(requests[0]["type"], "video");
    assert_eq!(requests[0]["part"], "snippet");
    assert_eq!(requests[0]["maxResults"], "10");
    assert_eq!(requests[0]["key"], "test-key");
}

#[tokio::test]
async fn test_empty_query_makes_no_request() {
    let stub = StubYoutube::new(StubReply::Body(youtube_response(vec![])));
    let gateway = youtube_gateway(stub.spawn().await, Some("test-key"));

    let error = gateway.search("   ").await.unwrap_err();

    assert_eq!(error, SearchError::EmptyQuery);
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn test_response_without_items_is_empty_success() {
    let stub = StubYoutube::new(StubReply::Body(json!({
        "kind": "youtube#searchListResponse",
        "pageInfo": { "totalResults": 0, "resultsPerPage": 10 }
    })));
    let gateway = youtube_gateway(stub.spawn().await, Some("test-key"));

    let results = gateway.search("nothing matches this").await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_missing_high_thumbnail_fails_search() {
    let mut item = youtube_item("aaa111", "Cat A");
    item["snippet"]["thumbnails"]
        .as_object_mut()
        .unwrap()
        .remove("high");
    let stub = StubYoutube::new(StubReply::Body(youtube_response(vec![
        youtube_item("bbb222", "Cat B"),
        item,
    ])));
    let gateway = youtube_gateway(stub.spawn().await, Some("test-key"));

    let error = gateway.search("cats").await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::ProviderError);
    assert!(error.to_string().contains("thumbnails.high"));
}

#[tokio::test]
async fn test_rejected_key_becomes_provider_error() {
    let stub = StubYoutube::new(StubReply::Failure(
        StatusCode::BAD_REQUEST,
        json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "errors": [{ "reason": "badRequest", "domain": "global" }],
                "status": "INVALID_ARGUMENT"
            }
        }),
    ));
    let gateway = youtube_gateway(stub.spawn().await, Some("wrong-key"));

    let error = gateway.search("cats").await.unwrap_err();

    assert_eq!(
        error,
        SearchError::provider("400 Bad Request: API key not valid. Please pass a valid API key.")
    );
}

#[tokio::test]
async fn test_unconfigured_key_is_sent_without_key_parameter() {
    let stub = StubYoutube::new(StubReply::Failure(
        StatusCode::FORBIDDEN,
        json!({ "error": { "code": 403, "message": "Method doesn't allow unregistered callers." } }),
    ));
    let gateway = youtube_gateway(stub.spawn().await, None);

    let error = gateway.search("cats").await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::ProviderError);
    assert!(!stub.requests()[0].contains_key("key"));
}

#[tokio::test]
async fn test_null_items_fail_with_decode_reason() {
    let stub = StubYoutube::new(StubReply::Body(json!({ "items": null })));
    let gateway = youtube_gateway(stub.spawn().await, Some("test-key"));

    let error = gateway.search("cats").await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::ProviderError);
    assert!(
        error
            .user_message()
            .starts_with("An error occurred: malformed response: invalid type: null"),
        "{error}"
    );
}
