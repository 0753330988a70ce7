//! Slug type for addressing documents.
//!
//! A slug is an ordered sequence of URL path segments. The empty sequence
//! denotes the root document. Slugs are immutable once constructed and are
//! derived from the incoming request path or from explicit segment lists.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered sequence of URL path segments identifying a document.
///
/// # Construction
///
/// - [`Slug::root`] — the root document (no segments)
/// - [`Slug::parse`] — from a URL path like `"guide"` or `"domain/page"`
/// - [`Slug::from_segments`] — from an explicit segment list
///
/// Empty segments are dropped during construction, so `"a//b"` and `"a/b/"`
/// both parse to the same slug. Segments never contain `/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(Vec<String>);

impl Slug {
    /// The root slug (no segments).
    #[must_use]
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Parse a slug from a URL path without leading slash.
    ///
    /// `""` parses to the root slug. Empty segments are dropped.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        Self(
            path.split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Build a slug from an explicit segment sequence.
    ///
    /// Empty segments are dropped; segments containing `/` are split.
    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            segments
                .into_iter()
                .flat_map(|s| {
                    s.as_ref()
                        .split('/')
                        .filter(|p| !p.is_empty())
                        .map(str::to_owned)
                        .collect::<Vec<_>>()
                })
                .collect(),
        )
    }

    /// True for the root slug.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// The path segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Joined path without leading slash (`""` for root).
    #[must_use]
    pub fn as_path(&self) -> String {
        self.0.join("/")
    }

    /// Canonical URL path with leading slash (`"/"` for root).
    #[must_use]
    pub fn url(&self) -> String {
        if self.is_root() {
            "/".to_owned()
        } else {
            format!("/{}", self.0.join("/"))
        }
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
