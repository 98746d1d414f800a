//! HTTP server wiring: state, routes and listener.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tubefind_core::TubefindConfig;
use tubefind_search::{SearchGateway, YoutubeProvider};

use crate::WebError;
use crate::pages::{health, search_form_page, search_submit};

/// Shared state handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Gateway shared by all requests
    pub search_gateway: Arc<SearchGateway>,
}

impl AppState {
    /// Wraps a gateway for sharing across requests.
    pub fn new(search_gateway: SearchGateway) -> Self {
        Self {
            search_gateway: Arc::new(search_gateway),
        }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(search_form_page))
        .route("/search", post(search_submit))
        // Route name used by earlier versions of the form
        .route("/search-youtube", post(search_submit))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server until the process is interrupted.
///
/// # Errors
/// - `WebError::Bind` - The configured address cannot be bound
/// - `WebError::Serve` - The server loop failed
pub async fn run_server(config: TubefindConfig) -> Result<(), WebError> {
    tracing::debug!(
        base_url = %config.provider.base_url,
        api_key_configured = config.provider.api_key.is_some(),
        "Configuring YouTube provider"
    );
    let provider = YoutubeProvider::from_config(&config.provider);
    let state = AppState::new(SearchGateway::new(Arc::new(provider)));

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| WebError::Bind {
            address: address.clone(),
            source,
        })?;

    tracing::info!("Tubefind running on http://{address}");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Tubefind stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
