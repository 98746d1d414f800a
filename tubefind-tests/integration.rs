//! Integration tests for Tubefind
//!
//! Exercise the search gateway together with the real YouTube provider
//! against a local stub of the YouTube API.

#[path = "support/mod.rs"]
mod support;

#[path = "style.rs"]
mod style;

#[path = "integration/concurrent_search.rs"]
mod concurrent_search;
#[path = "integration/youtube_gateway.rs"]
mod youtube_gateway;
