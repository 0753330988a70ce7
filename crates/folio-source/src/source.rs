//! Content source trait and core document types.
//!
//! Provides the [`ContentSource`] trait for abstracting document lookup and
//! enumeration, along with [`SourceError`] for unified error handling across
//! backends.
//!
//! # Slug Convention
//!
//! Documents are keyed by [`Slug`]: `Slug::root()` is the home document,
//! `Slug::parse("guide")` a standalone page, `Slug::parse("domain/page")` a
//! nested page. Backends map slugs to their internal storage format.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::slug::Slug;

/// Table of contents entry collected from a document heading.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Heading level (2-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor ID.
    pub id: String,
}

/// A resolved content document.
///
/// Owned by the content source; consumers only read it. The body is compiled
/// HTML with anchor hrefs exactly as authored — resolving relative hrefs
/// against [`Document::url`] is the page layer's concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Slug the document was resolved for.
    pub slug: Slug,
    /// Document title.
    pub title: String,
    /// Document description, if any.
    pub description: Option<String>,
    /// Compiled HTML body.
    pub body: String,
    /// Table of contents entries.
    pub toc: Vec<TocEntry>,
    /// Full-width display flag.
    pub full: bool,
    /// Canonical location (URL path with leading slash).
    pub url: String,
}

/// Enumeration record for the static build step: one per document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageParams {
    /// Slug of the document.
    pub slug: Slug,
}

/// Error from content source operations.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// I/O error reading from the backend.
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Document frontmatter could not be parsed.
    #[error("Invalid frontmatter in {}: {message}", .path.display())]
    Frontmatter {
        /// Path of the offending document.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}

/// Content source abstraction for document lookup and enumeration.
///
/// Both operations are read-only and independent; implementations must be
/// safe to share across concurrent requests. Nothing is cached at this
/// layer — each call re-derives its result.
pub trait ContentSource: Send + Sync {
    /// Look up a document by slug.
    ///
    /// Returns `Ok(None)` when no document matches — distinguishing "not
    /// found" from backend failure is the caller's concern.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the backend fails while reading or parsing
    /// a matching document.
    fn get_page(&self, slug: &Slug) -> Result<Option<Document>, SourceError>;

    /// Enumerate params for every document.
    ///
    /// Idempotent; yields exactly one entry per document, with no duplicates
    /// and no omissions. Used by the static build step, never on the live
    /// request path.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the backend cannot be enumerated.
    fn generate_params(&self) -> Result<Vec<PageParams>, SourceError>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_document_fields() {
        let doc = Document {
            slug: Slug::parse("guide"),
            title: "Guide".to_owned(),
            description: Some("How to".to_owned()),
            body: "<p>Content</p>".to_owned(),
            toc: vec![TocEntry {
                level: 2,
                title: "Setup".to_owned(),
                id: "setup".to_owned(),
            }],
            full: false,
            url: "/guide".to_owned(),
        };

        assert_eq!(doc.url, doc.slug.url());
        assert_eq!(doc.toc[0].id, "setup");
    }

    #[test]
    fn test_page_params_serialization() {
        let params = PageParams {
            slug: Slug::parse("domain/page"),
        };

        let json = serde_json::to_value(&params).unwrap();

        assert_eq!(json["slug"][0], "domain");
        assert_eq!(json["slug"][1], "page");
    }

    #[test]
    fn test_source_error_io_display() {
        let err = SourceError::Io {
            path: PathBuf::from("docs/guide.md"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };

        assert_eq!(err.to_string(), "I/O error reading docs/guide.md: missing");
    }

    #[test]
    fn test_source_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SourceError>();
    }
}
