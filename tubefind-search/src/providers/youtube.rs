//! YouTube Data API v3 search provider for production use.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tubefind_core::config::{DEFAULT_YOUTUBE_BASE_URL, ProviderConfig};
use url::Url;

use super::VideoSearchProvider;
use crate::errors::SearchError;
use crate::types::{ProviderQuery, SearchListResponse};

/// YouTube search provider calling the `search.list` endpoint.
///
/// The API key is passed through untouched; an absent or invalid key is
/// reported by YouTube at call time and surfaces as a provider error.
#[derive(Debug, Clone)]
pub struct YoutubeProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

/// Google API error envelope returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleError,
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    #[serde(default)]
    message: Option<String>,
}

impl YoutubeProvider {
    /// Create provider against the public YouTube API.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_config(DEFAULT_YOUTUBE_BASE_URL.to_string(), api_key)
    }

    /// Create provider with custom endpoint root.
    pub fn with_config(base_url: String, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Create provider from process configuration.
    pub fn from_config(config: &ProviderConfig) -> Self {
        Self::with_config(config.base_url.clone(), config.api_key.clone())
    }

    /// Builds the `search` endpoint URL with all request parameters.
    fn search_url(&self, query: &ProviderQuery) -> Result<Url, SearchError> {
        let endpoint = format!("{}/search", self.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&endpoint)
            .map_err(|e| SearchError::provider(format!("invalid provider URL {endpoint}: {e}")))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("part", query.part)
                .append_pair("type", query.result_type)
                .append_pair("maxResults", &query.max_results.to_string())
                .append_pair("q", &query.query);
            if let Some(key) = &self.api_key {
                pairs.append_pair("key", key);
            }
        }

        Ok(url)
    }
}

/// Renders a failed response as `"{status}: {message}"`, or the status alone.
fn describe_failure(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<GoogleErrorEnvelope>(body) {
        Ok(GoogleErrorEnvelope {
            error: GoogleError {
                message: Some(message),
            },
        }) if !message.trim().is_empty() => format!("{status}: {message}"),
        _ => status.to_string(),
    }
}

/// Flattens a transport error and its causes into `"outer: inner: ..."`.
///
/// The request URL is stripped first so the API key never reaches users or logs.
fn transport_error(error: reqwest::Error) -> SearchError {
    let error = error.without_url();
    let mut reason = error.to_string();
    let mut source = std::error::Error::source(&error);
    while let Some(cause) = source {
        reason.push_str(": ");
        reason.push_str(&cause.to_string());
        source = cause.source();
    }
    SearchError::provider(reason)
}

#[async_trait]
impl VideoSearchProvider for YoutubeProvider {
    async fn search_videos(
        &self,
        query: &ProviderQuery,
    ) -> Result<SearchListResponse, SearchError> {
        let url = self.search_url(query)?;
        tracing::debug!(query = %query.query, "Sending YouTube search request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::provider(describe_failure(status, &body)));
        }

        let body = response.bytes().await.map_err(transport_error)?;
        serde_json::from_slice::<SearchListResponse>(&body)
            .map_err(|e| SearchError::provider(format!("malformed response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use axum::Router;
    use axum::extract::{Query, State};
    use axum::http::StatusCode as AxumStatus;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use parking_lot::Mutex;
    use serde_json::json;

    use super::*;
    use crate::errors::ErrorKind;

    type SeenParams = Arc<Mutex<Vec<HashMap<String, String>>>>;

    async fn stub_search(
        State(seen): State<SeenParams>,
        Query(params): Query<HashMap<String, String>>,
    ) -> axum::response::Response {
        let key = params.get("key").cloned();
        seen.lock().push(params);

        match key.as_deref() {
            Some("good-key") => axum::Json(json!({
                "kind": "youtube#searchListResponse",
                "items": [{
                    "id": { "kind": "youtube#video", "videoId": "abc123" },
                    "snippet": {
                        "title": "Cat A",
                        "channelTitle": "Cats Inc",
                        "description": "meow",
                        "thumbnails": { "high": { "url": "https://i.ytimg.com/vi/abc123/hqdefault.jpg" } }
                    }
                }]
            }))
            .into_response(),
            Some("quota-key") => (
                AxumStatus::FORBIDDEN,
                axum::Json(json!({
                    "error": { "code": 403, "message": "The request cannot be completed because you have exceeded your quota." }
                })),
            )
                .into_response(),
            Some("garbled-key") => "not json".into_response(),
            Some("null-items-key") => axum::Json(json!({ "items": null })).into_response(),
            Some("null-thumbnails-key") => {
                axum::Json(json!({ "items": [{ "snippet": { "thumbnails": null } }] }))
                    .into_response()
            }
            _ => (AxumStatus::BAD_REQUEST, "not json").into_response(),
        }
    }

    async fn spawn_stub() -> (String, SeenParams) {
        let seen = SeenParams::default();
        let app = Router::new()
            .route("/youtube/v3/search", get(stub_search))
            .with_state(seen.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{address}/youtube/v3"), seen)
    }

    #[tokio::test]
    async fn test_sends_search_parameters_and_key() {
        let (base_url, seen) = spawn_stub().await;
        let provider = YoutubeProvider::with_config(base_url, Some("good-key".to_string()));

        let response = provider
            .search_videos(&ProviderQuery::videos("cute cats"))
            .await
            .unwrap();

        assert_eq!(response.items.len(), 1);
        let params = seen.lock()[0].clone();
        assert_eq!(params["q"], "cute cats");
        assert_eq!(params["part"], "snippet");
        assert_eq!(params["type"], "video");
        assert_eq!(params["maxResults"], "10");
        assert_eq!(params["key"], "good-key");
    }

    #[tokio::test]
    async fn test_google_error_message_is_surfaced() {
        let (base_url, _seen) = spawn_stub().await;
        let provider = YoutubeProvider::with_config(base_url, Some("quota-key".to_string()));

        let error = provider
            .search_videos(&ProviderQuery::videos("cats"))
            .await
            .unwrap_err();

        assert_eq!(
            error,
            SearchError::provider(
                "403 Forbidden: The request cannot be completed because you have exceeded your quota."
            )
        );
    }

    #[tokio::test]
    async fn test_missing_key_is_left_to_provider() {
        let (base_url, seen) = spawn_stub().await;
        let provider = YoutubeProvider::with_config(base_url, None);

        let error = provider
            .search_videos(&ProviderQuery::videos("cats"))
            .await
            .unwrap_err();

        assert!(!seen.lock()[0].contains_key("key"));
        assert_eq!(error, SearchError::provider("400 Bad Request"));
    }

    #[tokio::test]
    async fn test_unreachable_provider_hides_key() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let provider = YoutubeProvider::with_config(
            format!("http://{address}/youtube/v3"),
            Some("secret-key".to_string()),
        );
        let error = provider
            .search_videos(&ProviderQuery::videos("cats"))
            .await
            .unwrap_err();

        match error {
            SearchError::ProviderError { reason } => {
                assert!(reason.starts_with("error sending request: "), "{reason}");
                // The connect failure itself is kept, not just reqwest's summary
                assert!(reason.to_lowercase().contains("connect"), "{reason}");
                assert!(!reason.contains("secret-key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_provider_error() {
        let (base_url, _seen) = spawn_stub().await;
        let cases = [
            ("garbled-key", "expected"),
            ("null-items-key", "invalid type: null, expected a sequence"),
            ("null-thumbnails-key", "invalid type: null, expected a map"),
        ];

        for (key, cause) in cases {
            let provider = YoutubeProvider::with_config(base_url.clone(), Some(key.to_string()));
            let error = provider
                .search_videos(&ProviderQuery::videos("cats"))
                .await
                .unwrap_err();

            assert_eq!(error.kind(), ErrorKind::ProviderError, "{key}");
            match error {
                SearchError::ProviderError { reason } => {
                    assert!(reason.starts_with("malformed response: "), "{key}: {reason}");
                    assert!(reason.contains(cause), "{key}: {reason}");
                    assert!(!reason.contains(key), "{key}: {reason}");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_search_url_trims_trailing_slash() {
        let provider = YoutubeProvider::with_config(
            "https://example.com/youtube/v3/".to_string(),
            None,
        );
        let url = provider.search_url(&ProviderQuery::videos("a&b")).unwrap();

        assert_eq!(url.path(), "/youtube/v3/search");
        assert!(url.query().unwrap().contains("q=a%26b"));
    }
}
