//! Page metadata generation.

use folio_source::{ContentSource, Slug};
use serde::Serialize;

use crate::resolver::{ResolveError, resolve};

/// Plain metadata record for page-head generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    /// Page title.
    pub title: String,
    /// Page description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Generate metadata for a slug.
///
/// Shares resolution with the render path; no rendering happens here.
///
/// # Errors
///
/// Returns [`ResolveError::NotFound`] when no document matches — no record
/// is produced on that path.
pub fn generate_metadata(
    source: &dyn ContentSource,
    slug: &Slug,
) -> Result<PageMetadata, ResolveError> {
    let document = resolve(source, slug)?;
    Ok(PageMetadata {
        title: document.title,
        description: document.description,
    })
}
