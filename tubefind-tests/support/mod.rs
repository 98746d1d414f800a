//! Shared fixtures: a stub YouTube API and a running Tubefind server.

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use parking_lot::Mutex;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tubefind_core::config::ProviderConfig;
use tubefind_search::{SearchGateway, YoutubeProvider};
use tubefind_web::{AppState, router};

/// Canned reply of the stub YouTube API.
#[derive(Clone)]
pub enum StubReply {
    /// 200 with this JSON body
    Body(Value),
    /// Non-2xx status with this JSON body
    Failure(StatusCode, Value),
}

/// Stub of the YouTube `search` endpoint recording request parameters.
#[derive(Clone)]
pub struct StubYoutube {
    reply: StubReply,
    requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl StubYoutube {
    pub fn new(reply: StubReply) -> Self {
        Self {
            reply,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.requests.lock().clone()
    }

    /// Serves the stub on an ephemeral port, returning its API root.
    pub async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/youtube/v3/search", get(stub_search))
            .with_state(self.clone());
        let base = serve(app).await;
        format!("{base}/youtube/v3")
    }
}

async fn stub_search(
    State(stub): State<StubYoutube>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    stub.requests.lock().push(params);
    match stub.reply {
        StubReply::Body(body) => axum::Json(body).into_response(),
        StubReply::Failure(status, body) => (status, axum::Json(body)).into_response(),
    }
}

/// Serves `app` on an ephemeral local port, returning `http://host:port`.
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{address}")
}

/// Gateway wired to the real YouTube provider pointed at `base_url`.
pub fn youtube_gateway(base_url: String, api_key: Option<&str>) -> SearchGateway {
    let config = ProviderConfig {
        api_key: api_key.map(str::to_string),
        base_url,
    };
    SearchGateway::new(Arc::new(YoutubeProvider::from_config(&config)))
}

/// Starts the Tubefind web app backed by `gateway`, returning its root URL.
pub async fn spawn_tubefind(gateway: SearchGateway) -> String {
    serve(router(AppState::new(gateway))).await
}

/// `search.list` item in the shape YouTube returns it.
pub fn youtube_item(video_id: &str, title: &str) -> Value {
    json!({
        "kind": "youtube#searchResult",
        "etag": "etag",
        "id": { "kind": "youtube#video", "videoId": video_id },
        "snippet": {
            "publishedAt": "2024-01-01T00:00:00Z",
            "channelId": "UC000",
            "title": title,
            "description": format!("{title} description"),
            "thumbnails": {
                "default": { "url": format!("https://i.ytimg.com/vi/{video_id}/default.jpg"), "width": 120, "height": 90 },
                "medium": { "url": format!("https://i.ytimg.com/vi/{video_id}/mqdefault.jpg"), "width": 320, "height": 180 },
                "high": { "url": format!("https://i.ytimg.com/vi/{video_id}/hqdefault.jpg"), "width": 480, "height": 360 }
            },
            "channelTitle": format!("{title} channel"),
            "liveBroadcastContent": "none"
        }
    })
}

/// Full `search.list` response wrapping `items`.
pub fn youtube_response(items: Vec<Value>) -> Value {
    json!({
        "kind": "youtube#searchListResponse",
        "regionCode": "US",
        "pageInfo": { "totalResults": items.len(), "resultsPerPage": 10 },
        "items": items
    })
}
