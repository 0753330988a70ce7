//! Server error types and response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_page::ResolveError;
use folio_source::SourceError;

/// Server error type.
///
/// `PageNotFound` maps to 404; everything from the content source maps to
/// 500 and is otherwise propagated untouched.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Page not found in the content source.
    #[error("Page not found: {0}")]
    PageNotFound(String),
    /// Content source failure.
    #[error("{0}")]
    Source(#[from] SourceError),
}

impl From<ResolveError> for ServerError {
    fn from(e: ResolveError) -> Self {
        match e {
            ResolveError::NotFound(slug) => Self::PageNotFound(slug.to_string()),
            ResolveError::Source(source) => Self::Source(source),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::PageNotFound(_) => StatusCode::NOT_FOUND,
            Self::Source(e) => {
                tracing::error!(error = %e, "Content source failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
