//! Router construction.
//!
//! Builds the axum router with all routes and middleware. The page routes
//! are a catch-all: `/` serves the root document and `/{*slug}` everything
//! else, both through the same handler implementation.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        .route("/api/metadata/", get(handlers::metadata::get_root_metadata))
        .route(
            "/api/metadata/{*slug}",
            get(handlers::metadata::get_metadata),
        );

    // Page routes (catch-all; static prefixes like /api win over the wildcard)
    let page_routes = Router::new()
        .route("/", get(handlers::pages::get_root_page))
        .route("/{*slug}", get(handlers::pages::get_page));

    Router::new()
        .merge(api_routes)
        .merge(page_routes)
        .layer(
            ServiceBuilder::new()
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use folio_source::MockSource;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    fn test_router() -> Router {
        let source = MockSource::new()
            .with_page("", "Home", None, "<p>Welcome</p>")
            .with_page("intro", "Intro", Some("Getting started"), "<p>Hello</p>");

        create_router(Arc::new(AppState {
            source: Arc::new(source),
            verbose: false,
        }))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_get_page_returns_rendered_html() {
        let response = test_router()
            .oneshot(Request::builder().uri("/intro").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("<title>Intro</title>"));
        assert!(body.contains("Getting started"));
    }

    #[tokio::test]
    async fn test_get_root_serves_root_document() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("<title>Home</title>"));
    }

    #[tokio::test]
    async fn test_get_missing_page_is_404() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/missing-page")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_metadata_returns_json_record() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/metadata/intro")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert_eq!(body, r#"{"title":"Intro","description":"Getting started"}"#);
    }

    #[tokio::test]
    async fn test_get_metadata_missing_is_404() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/metadata/missing-page")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let response = test_router()
            .oneshot(Request::builder().uri("/intro").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
            "nosniff"
        );
        assert_eq!(response.headers().get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
    }
}
