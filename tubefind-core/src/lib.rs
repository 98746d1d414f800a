//! Tubefind Core - configuration and tracing
//!
//! Shared building blocks for the Tubefind crates: process configuration
//! loaded once at startup and the tracing subscriber setup.

pub mod config;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::{ProviderConfig, ServerConfig, TubefindConfig};
pub use tracing_setup::{CliLogLevel, init_tracing};
