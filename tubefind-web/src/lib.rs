//! Tubefind Web - server-rendered search UI

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Serves the search form, forwards submitted queries to the search gateway
//! and renders results or error messages as HTML.

pub mod components;
pub mod pages;
pub mod server;
pub mod templates;

// Re-export main types
pub use server::{AppState, router, run_server};

/// Errors that stop the web server. Per-request search failures never reach this type.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// Listener could not be bound.
    #[error("Failed to bind {address}: {source}")]
    Bind {
        /// Address that was requested
        address: String,
        /// Underlying socket error
        source: std::io::Error,
    },

    /// Server loop terminated with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}
