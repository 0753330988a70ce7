//! Mock content source for testing.
//!
//! Provides [`MockSource`] for unit testing without filesystem access.

use crate::slug::Slug;
use crate::source::{ContentSource, Document, PageParams, SourceError, TocEntry};

/// In-memory content source for testing.
///
/// Stores documents directly. Use the builder methods to configure the mock
/// with test data.
///
/// # Example
///
/// ```ignore
/// use folio_source::{ContentSource, MockSource, Slug};
///
/// let source = MockSource::new()
///     .with_page("", "Home", None, "<p>Welcome</p>")
///     .with_page("intro", "Intro", Some("Getting started"), "<p>Hi</p>");
///
/// assert!(source.get_page(&Slug::parse("intro")).unwrap().is_some());
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    documents: Vec<Document>,
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page with the given slug path, title, description, and body.
    ///
    /// The canonical URL is derived from the slug; the table of contents is
    /// empty and the full-width flag unset. Use [`with_document`](Self::with_document)
    /// for full control.
    #[must_use]
    pub fn with_page(
        mut self,
        path: &str,
        title: impl Into<String>,
        description: Option<&str>,
        body: impl Into<String>,
    ) -> Self {
        let slug = Slug::parse(path);
        self.documents.push(Document {
            url: slug.url(),
            slug,
            title: title.into(),
            description: description.map(str::to_owned),
            body: body.into(),
            toc: Vec::new(),
            full: false,
        });
        self
    }

    /// Add a fully specified document.
    #[must_use]
    pub fn with_document(mut self, document: Document) -> Self {
        self.documents.push(document);
        self
    }

    /// Add a table of contents to the most recently added document.
    ///
    /// # Panics
    ///
    /// Panics if no document has been added yet.
    #[must_use]
    pub fn with_toc(mut self, toc: Vec<TocEntry>) -> Self {
        self.documents
            .last_mut()
            .expect("with_toc requires a document")
            .toc = toc;
        self
    }
}

impl ContentSource for MockSource {
    fn get_page(&self, slug: &Slug) -> Result<Option<Document>, SourceError> {
        Ok(self.documents.iter().find(|d| &d.slug == slug).cloned())
    }

    fn generate_params(&self) -> Result<Vec<PageParams>, SourceError> {
        Ok(self
            .documents
            .iter()
            .map(|d| PageParams {
                slug: d.slug.clone(),
            })
            .collect())
    }
}
