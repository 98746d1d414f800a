//! Centralized configuration for Tubefind.
//!
//! Settings are read once at process start. Nothing here validates the
//! provider API key; a missing or rejected key surfaces as a provider error
//! on the first search.

use std::path::Path;

/// Default YouTube Data API v3 endpoint root.
pub const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Environment variable holding the provider API key.
pub const API_KEY_ENV: &str = "YOUTUBE_API_KEY";

/// Central configuration for all Tubefind components.
#[derive(Debug, Clone, Default)]
pub struct TubefindConfig {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// Socket address string in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// External video search provider configuration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Pre-issued API key, sent verbatim with every search request
    pub api_key: Option<String>,
    /// API root the `search` endpoint is resolved against
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_YOUTUBE_BASE_URL.to_string(),
        }
    }
}

impl TubefindConfig {
    /// Creates configuration with environment variable overrides.
    ///
    /// Loads a `.env` file from the working directory first when one exists.
    /// Its variables stay in the process environment, so `RUST_LOG` set there
    /// applies to tracing initialized afterwards.
    pub fn from_env() -> Self {
        // A missing .env file is the normal production case.
        let _ = dotenv::dotenv();
        Self::from_env_vars()
    }

    /// Like [`TubefindConfig::from_env`], reading the dotenv file at `path`.
    pub fn from_env_file(path: &Path) -> Self {
        if let Err(e) = dotenv::from_path(path) {
            tracing::debug!(path = %path.display(), error = %e, "No env file loaded");
        }
        Self::from_env_vars()
    }

    /// Applies environment overrides on top of the defaults without touching `.env`.
    pub fn from_env_vars() -> Self {
        let mut config = Self::default();

        if let Ok(key) = std::env::var(API_KEY_ENV)
            && !key.is_empty()
        {
            config.provider.api_key = Some(key);
        }

        if let Ok(base_url) = std::env::var("TUBEFIND_YOUTUBE_BASE_URL")
            && !base_url.is_empty()
        {
            config.provider.base_url = base_url;
        }

        if let Ok(host) = std::env::var("TUBEFIND_HOST")
            && !host.is_empty()
        {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("TUBEFIND_PORT")
            && let Ok(port) = port.parse::<u16>()
        {
            config.server.port = port;
        }

        config
    }
}
