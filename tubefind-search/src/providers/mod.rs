//! Provider implementations for video search.

use async_trait::async_trait;

use crate::errors::SearchError;
use crate::types::{ProviderQuery, SearchListResponse};

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod youtube;

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockProvider;
pub use youtube::YoutubeProvider;

/// Trait for external video search providers.
///
/// Implementations must be safe to share across concurrent requests; the
/// gateway holds one instance behind an `Arc` for the process lifetime.
#[async_trait]
pub trait VideoSearchProvider: Send + Sync + std::fmt::Debug {
    /// Runs one search call and returns the raw provider response.
    ///
    /// # Errors
    /// - `SearchError::ProviderError` - Authentication, quota, network or decode failure
    async fn search_videos(
        &self,
        query: &ProviderQuery,
    ) -> Result<SearchListResponse, SearchError>;
}
