//! Data types for video search.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::SearchError;

/// Number of results requested from the provider. Only the first page is used.
pub const MAX_RESULTS: u32 = 10;

/// Thumbnail resolution copied into [`SearchResult::thumbnail_url`].
pub const THUMBNAIL_RESOLUTION: &str = "high";

const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// A single video returned by a search, flattened for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Display name of the video
    pub title: String,
    /// Opaque provider identifier
    pub video_id: String,
    /// High resolution preview image, not checked for well-formedness
    pub thumbnail_url: String,
    /// Publisher name
    pub channel_title: String,
    /// Free-form summary
    pub description: String,
}

impl SearchResult {
    /// Playback URL for this video.
    pub fn watch_url(&self) -> String {
        format!("{WATCH_URL_PREFIX}{}", urlencoding::encode(&self.video_id))
    }
}

/// Parameters of one provider search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderQuery {
    /// Free-text search term
    pub query: String,
    /// Provider resource type filter
    pub result_type: &'static str,
    /// Provider response part to include
    pub part: &'static str,
    /// Page size
    pub max_results: u32,
}

impl ProviderQuery {
    /// Video search for `query`: type "video", part "snippet", first page of [`MAX_RESULTS`].
    pub fn videos(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            result_type: "video",
            part: "snippet",
            max_results: MAX_RESULTS,
        }
    }
}

/// Provider response body for a search call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchListResponse {
    /// First page of results, in provider order
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// One item of a [`SearchListResponse`].
///
/// Every field is optional on the wire so a missing field is reported as a
/// provider error during conversion instead of failing the whole decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchItem {
    /// Identifier block
    #[serde(default)]
    pub id: Option<ItemId>,
    /// Metadata block
    #[serde(default)]
    pub snippet: Option<Snippet>,
}

/// Identifier block of a search item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemId {
    /// Present for video results only
    #[serde(default)]
    pub video_id: Option<String>,
}

/// Metadata block of a search item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// Video title
    #[serde(default)]
    pub title: Option<String>,
    /// Publisher name
    #[serde(default)]
    pub channel_title: Option<String>,
    /// Free-form summary
    #[serde(default)]
    pub description: Option<String>,
    /// Keyed by resolution name ("default", "medium", "high", ...)
    #[serde(default)]
    pub thumbnails: HashMap<String, Thumbnail>,
}

/// A single thumbnail rendition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Image location
    #[serde(default)]
    pub url: Option<String>,
}

fn missing(field: &str) -> SearchError {
    SearchError::provider(format!("malformed response: item is missing `{field}`"))
}

impl TryFrom<SearchItem> for SearchResult {
    type Error = SearchError;

    fn try_from(item: SearchItem) -> Result<Self, Self::Error> {
        let video_id = item
            .id
            .and_then(|id| id.video_id)
            .ok_or_else(|| missing("id.videoId"))?;
        let mut snippet = item.snippet.ok_or_else(|| missing("snippet"))?;
        let thumbnail_url = snippet
            .thumbnails
            .remove(THUMBNAIL_RESOLUTION)
            .and_then(|thumbnail| thumbnail.url)
            .ok_or_else(|| missing("snippet.thumbnails.high.url"))?;

        Ok(Self {
            title: snippet.title.ok_or_else(|| missing("snippet.title"))?,
            video_id,
            thumbnail_url,
            channel_title: snippet
                .channel_title
                .ok_or_else(|| missing("snippet.channelTitle"))?,
            description: snippet
                .description
                .ok_or_else(|| missing("snippet.description"))?,
        })
    }
}
