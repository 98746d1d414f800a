//! Search page - form, results and error display

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use serde::Deserialize;
use tubefind_search::SearchResult;

use crate::components::{layout, video};
use crate::server::AppState;
use crate::templates::base_template;

/// Submitted search form.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    /// Free-text query; a missing field counts as empty
    #[serde(default)]
    pub query: String,
}

/// What the search page shows below the form.
#[derive(Debug)]
pub enum SearchView<'a> {
    /// Fresh page, nothing submitted yet
    Blank,
    /// Search failed; `message` is already user-facing text
    Failed {
        /// Submitted query, used to prefill the form
        query: &'a str,
        /// Error banner text
        message: String,
    },
    /// Search succeeded
    Results {
        /// Submitted query, echoed back
        query: &'a str,
        /// Results in provider order
        results: Vec<SearchResult>,
    },
}

/// Renders the search page for `view`.
pub fn render_search_page(view: &SearchView<'_>) -> Html<String> {
    let header = layout::page_header("Search YouTube", Some("Find videos by keyword"));

    let body = match view {
        SearchView::Blank => layout::search_form(""),
        SearchView::Failed { query, message } => format!(
            "{}{}",
            layout::search_form(query),
            layout::alert(layout::AlertKind::Error, message)
        ),
        SearchView::Results { query, results } => {
            let summary = format!(
                r#"<h2 class="page-header">Results for "{}"</h2>"#,
                layout::escape_html(query)
            );
            let listing = if results.is_empty() {
                layout::alert(layout::AlertKind::Info, "No videos found.")
            } else {
                video::results_grid(results)
            };
            format!("{}{summary}{listing}", layout::search_form(query))
        }
    };

    Html(base_template("Search", &format!("{header}{body}")))
}

/// `GET /` - renders the empty search form.
pub async fn search_form_page() -> Html<String> {
    render_search_page(&SearchView::Blank)
}

/// `POST /search` - runs the search and renders results or the error message.
///
/// Failures are rendered on the page with status 200; they never become server errors.
pub async fn search_submit(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Html<String> {
    let view = match state.search_gateway.search(&form.query).await {
        Ok(results) => SearchView::Results {
            query: &form.query,
            results,
        },
        Err(e) => SearchView::Failed {
            query: &form.query,
            message: e.user_message(),
        },
    };

    render_search_page(&view)
}

/// `GET /health` - liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;
    use tubefind_search::{MockProvider, SearchError, SearchGateway};

    use super::*;
    use crate::server::router;

    fn app_with(mock: &MockProvider) -> axum::Router {
        router(AppState::new(SearchGateway::new(Arc::new(mock.clone()))))
    }

    async fn post_form(app: axum::Router, path: &str, body: &'static str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_renders_form() {
        let app = app_with(&MockProvider::with_titles(&[]));
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains(r#"name="query""#));
        assert!(!html.contains("alert-error"));
    }

    #[tokio::test]
    async fn test_submit_renders_results_in_order() {
        let mock = MockProvider::with_titles(&["Cat A", "Cat B"]);

        let (status, html) = post_form(app_with(&mock), "/search", "query=cats").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains(r#"Results for "cats""#));
        assert!(html.find("Cat A").unwrap() < html.find("Cat B").unwrap());
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_submit_shows_validation_message() {
        let mock = MockProvider::with_titles(&["Cat A"]);

        let (status, html) = post_form(app_with(&mock), "/search", "query=+++").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Query cannot be empty."));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_missing_field_counts_as_empty() {
        let mock = MockProvider::with_titles(&["Cat A"]);

        let (status, html) = post_form(app_with(&mock), "/search", "").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Query cannot be empty."));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_rendered_not_raised() {
        let mock = MockProvider::with_error(SearchError::provider("403 Forbidden: keyInvalid"));

        let (status, html) = post_form(app_with(&mock), "/search", "query=cats").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("An error occurred: 403 Forbidden: keyInvalid"));
    }

    #[tokio::test]
    async fn test_legacy_route_and_escaping() {
        let mock = MockProvider::with_titles(&[]);

        let (status, html) =
            post_form(app_with(&mock), "/search-youtube", "query=%3Cscript%3E").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("No videos found."));
    }

    #[tokio::test]
    async fn test_health() {
        let app = app_with(&MockProvider::with_titles(&[]));
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
