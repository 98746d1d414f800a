//! Mock provider implementation for testing.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::VideoSearchProvider;
use crate::errors::SearchError;
use crate::types::{ItemId, ProviderQuery, SearchItem, SearchListResponse, Snippet, Thumbnail};

/// Mock provider returning a canned outcome and recording every call.
///
/// Clones share the call log, so a test can keep one handle while the
/// gateway owns another.
#[derive(Debug, Clone)]
pub struct MockProvider {
    outcome: Result<SearchListResponse, SearchError>,
    calls: Arc<Mutex<Vec<ProviderQuery>>>,
}

impl MockProvider {
    /// Mock that answers every call with `response`.
    pub fn with_response(response: SearchListResponse) -> Self {
        Self {
            outcome: Ok(response),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Mock that answers with one well-formed video item per title, in order.
    pub fn with_titles(titles: &[&str]) -> Self {
        let items = titles
            .iter()
            .enumerate()
            .map(|(index, title)| video_item(&format!("video{index}"), title))
            .collect();
        Self::with_response(SearchListResponse { items })
    }

    /// Mock that fails every call with `error`.
    pub fn with_error(error: SearchError) -> Self {
        Self {
            outcome: Err(error),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queries received so far, oldest first.
    pub fn calls(&self) -> Vec<ProviderQuery> {
        self.calls.lock().clone()
    }

    /// Number of search calls received.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl VideoSearchProvider for MockProvider {
    async fn search_videos(
        &self,
        query: &ProviderQuery,
    ) -> Result<SearchListResponse, SearchError> {
        self.calls.lock().push(query.clone());
        self.outcome.clone()
    }
}

/// Builds a complete video item the way the YouTube API returns it.
pub fn video_item(video_id: &str, title: &str) -> SearchItem {
    let thumbnails = ["default", "medium", "high"]
        .into_iter()
        .map(|resolution| {
            (
                resolution.to_string(),
                Thumbnail {
                    url: Some(format!(
                        "https://i.ytimg.com/vi/{video_id}/{resolution}.jpg"
                    )),
                },
            )
        })
        .collect();

    SearchItem {
        id: Some(ItemId {
            video_id: Some(video_id.to_string()),
        }),
        snippet: Some(Snippet {
            title: Some(title.to_string()),
            channel_title: Some(format!("{title} Channel")),
            description: Some(format!("About {title}")),
            thumbnails,
        }),
    }
}
