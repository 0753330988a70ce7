//! Static params generation for the build step.

use folio_source::{ContentSource, PageParams, SourceError};

/// Enumerate the params of every document in the source.
///
/// Pure delegation to the source's enumeration: idempotent, exactly one
/// entry per document. Consumed by the static build step only — live request
/// handling never calls this.
///
/// # Errors
///
/// Returns [`SourceError`] if the source cannot be enumerated.
pub fn generate_static_params(source: &dyn ContentSource) -> Result<Vec<PageParams>, SourceError> {
    source.generate_params()
}
