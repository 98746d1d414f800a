//! Complete browser-style workflow: load form, submit query, read rendered results.

use axum::http::StatusCode;
use serde_json::json;

use crate::support::{
    StubReply, StubYoutube, spawn_tubefind, youtube_gateway, youtube_item, youtube_response,
};

async fn submit(base_url: &str, path: &str, query: &str) -> (reqwest::StatusCode, String) {
    let response = reqwest::Client::new()
        .post(format!("{base_url}{path}"))
        .form(&[("query", query)])
        .send()
        .await
        .unwrap();
    let status = response.status();
    (status, response.text().await.unwrap())
}

#[tokio::test]
async fn test_form_page_is_served() {
    let stub = StubYoutube::new(StubReply::Body(youtube_response(vec![])));
    let app = spawn_tubefind(youtube_gateway(stub.spawn().await, Some("test-key"))).await;

    let response = reqwest::get(format!("{app}/")).await.unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let html = response.text().await.unwrap();
    assert!(html.contains(r#"<form class="search-form" method="post" action="/search">"#));
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn test_search_renders_results_with_echoed_query() {
    let stub = StubYoutube::new(StubReply::Body(youtube_response(vec![
        youtube_item("aaa111", "Cat A"),
        youtube_item("bbb222", "Cat B"),
    ])));
    let app = spawn_tubefind(youtube_gateway(stub.spawn().await, Some("test-key"))).await;

    let (status, html) = submit(&app, "/search", "cats").await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(html.contains(r#"Results for "cats""#));
    assert!(html.contains(r#"value="cats""#));
    assert!(html.contains("https://www.youtube.com/watch?v=aaa111"));
    assert!(html.contains("https://i.ytimg.com/vi/bbb222/hqdefault.jpg"));
    assert!(html.find("Cat A").unwrap() < html.find("Cat B").unwrap());
    assert_eq!(stub.requests().len(), 1);
}

#[tokio::test]
async fn test_whitespace_query_shows_message_without_provider_call() {
    let stub = StubYoutube::new(StubReply::Body(youtube_response(vec![])));
    let app = spawn_tubefind(youtube_gateway(stub.spawn().await, Some("test-key"))).await;

    let (status, html) = submit(&app, "/search", "  ").await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(html.contains("Query cannot be empty."));
    assert!(stub.requests().is_empty());
}

#[tokio::test]
async fn test_quota_failure_is_shown_on_page() {
    let stub = StubYoutube::new(StubReply::Failure(
        StatusCode::FORBIDDEN,
        json!({ "error": { "code": 403, "message": "quota exceeded" } }),
    ));
    let app = spawn_tubefind(youtube_gateway(stub.spawn().await, Some("test-key"))).await;

    let (status, html) = submit(&app, "/search-youtube", "cats").await;

    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(html.contains("An error occurred: 403 Forbidden: quota exceeded"));
    assert!(!html.contains("test-key"));
}
