//! Search gateway: the single entry point the web layer calls.
//!
//! Validates the query, makes exactly one provider call and flattens the
//! response. Each call is independent; the gateway holds no mutable state.

use std::sync::Arc;

use crate::errors::SearchError;
use crate::providers::VideoSearchProvider;
use crate::types::{ProviderQuery, SearchResult};

/// Video search gateway over an injected provider.
#[derive(Debug, Clone)]
pub struct SearchGateway {
    provider: Arc<dyn VideoSearchProvider>,
}

impl SearchGateway {
    /// Creates a gateway using `provider` for every search.
    pub fn new(provider: Arc<dyn VideoSearchProvider>) -> Self {
        Self { provider }
    }

    /// Searches for videos matching `query`.
    ///
    /// Returns up to [`crate::MAX_RESULTS`] results in provider order. The
    /// provider receives the trimmed query.
    ///
    /// # Errors
    /// - `SearchError::EmptyQuery` - Query is empty after trimming; the provider is not called
    /// - `SearchError::ProviderError` - Provider call failed or an item lacked an expected field
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        tracing::debug!(query, "Accepted search query");

        let response = self
            .provider
            .search_videos(&ProviderQuery::videos(query))
            .await
            .inspect_err(|e| tracing::warn!(query, error = %e, "Provider search failed"))?;

        let results = response
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                SearchResult::try_from(item).inspect_err(|e| {
                    tracing::warn!(query, index, error = %e, "Discarding malformed provider response");
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(query, count = results.len(), "Search completed");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::providers::MockProvider;
    use crate::providers::mock::video_item;
    use crate::types::{MAX_RESULTS, SearchListResponse};

    fn gateway_with(mock: &MockProvider) -> SearchGateway {
        SearchGateway::new(Arc::new(mock.clone()))
    }

    #[tokio::test]
    async fn test_valid_query_calls_provider_once() {
        let mock = MockProvider::with_titles(&["Cat A"]);
        let gateway = gateway_with(&mock);

        gateway.search("  cats ").await.unwrap();

        assert_eq!(mock.calls(), vec![ProviderQuery::videos("cats")]);
        assert_eq!(mock.calls()[0].max_results, MAX_RESULTS);
    }

    #[tokio::test]
    async fn test_blank_queries_never_reach_provider() {
        let mock = MockProvider::with_titles(&["Cat A"]);
        let gateway = gateway_with(&mock);

        for query in ["", " ", "\t\n  "] {
            let error = gateway.search(query).await.unwrap_err();
            assert_eq!(error.kind(), ErrorKind::EmptyQuery);
        }
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_results_keep_provider_order() {
        let mock = MockProvider::with_titles(&["Cat A", "Cat B"]);
        let gateway = gateway_with(&mock);

        let results = gateway.search("cats").await.unwrap();

        let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Cat A", "Cat B"]);
        assert_eq!(results[0].video_id, "video0");
        assert_eq!(results[1].thumbnail_url, "https://i.ytimg.com/vi/video1/high.jpg");
        assert_eq!(results[1].channel_title, "Cat B Channel");
        assert_eq!(results[1].description, "About Cat B");
    }

    #[tokio::test]
    async fn test_result_count_matches_item_count() {
        for count in [0, 1, 10] {
            let titles: Vec<String> = (0..count).map(|i| format!("Video {i}")).collect();
            let titles: Vec<&str> = titles.iter().map(String::as_str).collect();
            let gateway = gateway_with(&MockProvider::with_titles(&titles));

            assert_eq!(gateway.search("anything").await.unwrap().len(), count);
        }
    }

    #[tokio::test]
    async fn test_one_malformed_item_fails_whole_search() {
        let mut broken = video_item("bad", "Broken");
        if let Some(snippet) = broken.snippet.as_mut() {
            snippet.thumbnails.remove("high");
        }
        let mock = MockProvider::with_response(SearchListResponse {
            items: vec![video_item("ok", "Fine"), broken],
        });

        let error = gateway_with(&mock).search("cats").await.unwrap_err();

        assert_eq!(error.kind(), ErrorKind::ProviderError);
    }

    #[tokio::test]
    async fn test_provider_failure_is_propagated_with_message() {
        let mock = MockProvider::with_error(SearchError::provider("403 Forbidden: keyInvalid"));

        let error = gateway_with(&mock).search("cats").await.unwrap_err();

        match error {
            SearchError::ProviderError { reason } => assert_eq!(reason, "403 Forbidden: keyInvalid"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(mock.call_count(), 1);
    }
}
