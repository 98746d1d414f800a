//! End-to-end tests: HTTP form submission through the running server to the stub YouTube API.

#[path = "../support/mod.rs"]
mod support;

mod search_workflow;
