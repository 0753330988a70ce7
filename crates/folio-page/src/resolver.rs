//! Slug resolution against a content source.

use folio_source::{ContentSource, Document, Slug, SourceError};

/// Error returned when page resolution fails.
///
/// Not-found is a typed result rather than a control-flow jump so callers
/// can test resolution independently of any routing runtime; the host maps
/// [`ResolveError::NotFound`] to its 404 handling and nothing else.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No document matches the slug.
    #[error("Page not found: {0}")]
    NotFound(Slug),
    /// The content source failed; propagated unchanged.
    #[error(transparent)]
    Source(#[from] SourceError),
}

/// Resolve a slug to its document.
///
/// The root slug resolves to the root document if one exists. Read-only:
/// the document is returned as the source produced it.
///
/// # Errors
///
/// Returns [`ResolveError::NotFound`] when no document matches, and
/// [`ResolveError::Source`] when the content source itself fails.
pub fn resolve(source: &dyn ContentSource, slug: &Slug) -> Result<Document, ResolveError> {
    source
        .get_page(slug)?
        .ok_or_else(|| ResolveError::NotFound(slug.clone()))
}
