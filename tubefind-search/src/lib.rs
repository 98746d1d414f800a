//! Tubefind Search - video search gateway

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Validates user queries, forwards them to an injected video search provider
//! and flattens the provider response into [`SearchResult`] records.

pub mod errors;
pub mod gateway;
pub mod providers;
pub mod types;

// Re-export main types
pub use errors::{ErrorKind, SearchError};
pub use gateway::SearchGateway;
#[cfg(any(test, feature = "test-utils"))]
pub use providers::MockProvider;
pub use providers::{VideoSearchProvider, YoutubeProvider};
pub use types::{MAX_RESULTS, ProviderQuery, SearchListResponse, SearchResult};

/// Convenience type alias for Results with SearchError.
pub type Result<T> = std::result::Result<T, SearchError>;
