//! Metadata API endpoint.
//!
//! Repeats the page lookup and returns the plain `{title, description}`
//! record as JSON — same resolution semantics as the page route, no
//! rendering.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use folio_page::PageMetadata;
use folio_source::Slug;

use crate::error::ServerError;
use crate::state::AppState;

/// Handle GET /api/metadata/ (root document).
pub(crate) async fn get_root_metadata(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PageMetadata>, ServerError> {
    get_metadata_impl("", &state)
}

/// Handle GET /api/metadata/{*slug}.
pub(crate) async fn get_metadata(
    Path(path): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<PageMetadata>, ServerError> {
    get_metadata_impl(&path, &state)
}

/// Shared implementation for metadata generation.
fn get_metadata_impl(path: &str, state: &AppState) -> Result<Json<PageMetadata>, ServerError> {
    let slug = Slug::parse(path);
    let metadata = folio_page::generate_metadata(state.source.as_ref(), &slug)?;
    Ok(Json(metadata))
}
