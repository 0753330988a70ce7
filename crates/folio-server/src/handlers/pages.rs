//! Documentation page endpoint.
//!
//! Resolves the catch-all slug and returns the rendered HTML page. The root
//! route and the catch-all route share one implementation; they differ only
//! in how the slug arrives.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;
use folio_source::Slug;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET / (root document).
pub(crate) async fn get_root_page(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    get_page_impl("", &state)
}

/// Handle GET /{*slug}.
pub(crate) async fn get_page(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    get_page_impl(&path, &state)
}

/// Shared implementation for page rendering.
fn get_page_impl(path: &str, state: &AppState) -> Result<Html<String>, ServerError> {
    let slug = Slug::parse(path);
    let document = folio_page::resolve(state.source.as_ref(), &slug)?;

    if state.verbose {
        tracing::info!(slug = %slug, title = %document.title, "Rendering page");
    }

    Ok(Html(folio_page::render(&document)))
}

#[cfg(test)]
mod tests {
    use folio_source::MockSource;
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_state(source: MockSource) -> AppState {
        AppState {
            source: Arc::new(source),
            verbose: false,
        }
    }

    #[test]
    fn test_get_page_impl_renders_document() {
        let state = test_state(MockSource::new().with_page(
            "intro",
            "Intro",
            Some("Getting started"),
            "<p>Hello</p>",
        ));

        let Html(html) = get_page_impl("intro", &state).unwrap();

        assert!(html.contains("<title>Intro</title>"));
        assert!(html.contains("Getting started"));
        assert!(html.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_get_page_impl_empty_path_is_root() {
        let state = test_state(MockSource::new().with_page("", "Home", None, "<p>Welcome</p>"));

        let Html(html) = get_page_impl("", &state).unwrap();

        assert!(html.contains("<title>Home</title>"));
    }

    #[test]
    fn test_get_page_impl_missing_is_not_found() {
        let state = test_state(MockSource::new().with_page("intro", "Intro", None, ""));

        let err = get_page_impl("missing-page", &state).unwrap_err();

        assert!(matches!(err, ServerError::PageNotFound(_)));
        assert_eq!(err.to_string(), "Page not found: /missing-page");
    }
}
