//! Relative link rewriting for document bodies.
//!
//! Anchor hrefs are authored relative to the document they live in
//! (`./sibling.md`, `../other`). The rewriter resolves them to absolute URL
//! paths against the document's canonical location so they survive being
//! served from any route. Stateless per render.

use folio_source::Document;
use regex::{Captures, Regex};

/// Rewrites relative anchor hrefs against a document's canonical location.
pub struct RelativeLinkRewriter {
    /// Base URL path without leading slash; the document's location is
    /// treated as the directory relative hrefs resolve within.
    base: String,
}

impl RelativeLinkRewriter {
    /// Create a rewriter for the given document.
    #[must_use]
    pub fn new(document: &Document) -> Self {
        Self {
            base: document.url.trim_matches('/').to_owned(),
        }
    }

    /// Rewrite every anchor href in a compiled HTML body.
    #[must_use]
    pub fn apply(&self, html: &str) -> String {
        // The body compiler emits anchors as `<a href="...">`.
        let anchor = Regex::new(r#"<a href="([^"]*)""#).expect("valid anchor pattern");
        anchor
            .replace_all(html, |caps: &Captures<'_>| {
                format!(r#"<a href="{}""#, self.rewrite(&caps[1]))
            })
            .into_owned()
    }

    /// Rewrite a single href.
    ///
    /// - External links (`http://`, `https://`, `//`, `mailto:`, `tel:`) and
    ///   fragment-only links pass through unchanged.
    /// - Absolute paths keep their location but get the same clean-URL
    ///   treatment (`.md` and `/index` suffixes stripped).
    /// - Relative paths resolve against the document location, with `.` and
    ///   `..` applied and traversal clamped at the site root.
    #[must_use]
    pub fn rewrite(&self, href: &str) -> String {
        if href.starts_with("http://")
            || href.starts_with("https://")
            || href.starts_with("//")
            || href.starts_with("mailto:")
            || href.starts_with("tel:")
            || href.starts_with('#')
            || href.is_empty()
        {
            return href.to_owned();
        }

        // Split off a trailing fragment before resolving the path.
        let (path_part, fragment) = match href.find('#') {
            Some(pos) => (&href[..pos], &href[pos..]),
            None => (href, ""),
        };

        let resolved = if let Some(absolute) = path_part.strip_prefix('/') {
            absolute.to_owned()
        } else {
            resolve_relative_path(path_part, &self.base)
        };

        // Strip .md extension and /index suffix for clean URLs.
        let clean = resolved.strip_suffix(".md").unwrap_or(&resolved);
        let clean = clean.strip_suffix("/index").unwrap_or(clean);
        let clean = if clean == "index" { "" } else { clean };

        format!("/{clean}{fragment}")
    }
}

/// Resolve a relative path against a base directory path.
///
/// Handles `.` (current), `..` (parent), and plain relative segments.
fn resolve_relative_path(relative: &str, base: &str) -> String {
    let mut segments: Vec<&str> = base.split('/').filter(|s| !s.is_empty()).collect();

    for component in relative.split('/') {
        match component {
            "" | "." => {}
            ".." => {
                // Parent directory; ignored at root to prevent traversal.
                segments.pop();
            }
            _ => segments.push(component),
        }
    }

    segments.join("/")
}

#[cfg(test)]
mod tests {
    use folio_source::{ContentSource, MockSource, Slug};
    use pretty_assertions::assert_eq;

    use super::*;

    fn rewriter_at(path: &str) -> RelativeLinkRewriter {
        let source = MockSource::new().with_page(path, "T", None, "");
        let doc = source.get_page(&Slug::parse(path)).unwrap().unwrap();
        RelativeLinkRewriter::new(&doc)
    }

    #[test]
    fn test_rewrite_sibling_relative_to_document() {
        let rewriter = rewriter_at("docs/intro");

        assert_eq!(rewriter.rewrite("./sibling.md"), "/docs/intro/sibling");
        assert_eq!(rewriter.rewrite("sibling.md"), "/docs/intro/sibling");
    }

    #[test]
    fn test_rewrite_parent() {
        let rewriter = rewriter_at("domains/billing/guide");

        assert_eq!(rewriter.rewrite("../other.md"), "/domains/billing/other");
    }

    #[test]
    fn test_rewrite_traversal_clamped_at_root() {
        let rewriter = rewriter_at("a/b");

        assert_eq!(rewriter.rewrite("../../../etc/passwd.md"), "/etc/passwd");
    }

    #[test]
    fn test_rewrite_from_root_document() {
        let rewriter = rewriter_at("");

        assert_eq!(rewriter.rewrite("guide.md"), "/guide");
    }

    #[test]
    fn test_rewrite_external_unchanged() {
        let rewriter = rewriter_at("docs/intro");

        assert_eq!(
            rewriter.rewrite("https://example.com/page"),
            "https://example.com/page"
        );
        assert_eq!(
            rewriter.rewrite("mailto:test@example.com"),
            "mailto:test@example.com"
        );
        assert_eq!(rewriter.rewrite("//cdn.example.com/x"), "//cdn.example.com/x");
    }

    #[test]
    fn test_rewrite_fragment_only_unchanged() {
        let rewriter = rewriter_at("docs/intro");

        assert_eq!(rewriter.rewrite("#section"), "#section");
    }

    #[test]
    fn test_rewrite_keeps_fragment() {
        let rewriter = rewriter_at("base/path");

        assert_eq!(rewriter.rewrite("./page.md#section"), "/base/path/page#section");
    }

    #[test]
    fn test_rewrite_absolute_path_cleaned() {
        let rewriter = rewriter_at("base/path");

        assert_eq!(rewriter.rewrite("/absolute/page.md"), "/absolute/page");
        assert_eq!(rewriter.rewrite("/absolute/page"), "/absolute/page");
    }

    #[test]
    fn test_rewrite_index_suffix_stripped() {
        let rewriter = rewriter_at("adr");

        assert_eq!(rewriter.rewrite("adr-101/index.md"), "/adr/adr-101");
    }

    #[test]
    fn test_apply_rewrites_anchors_only() {
        let rewriter = rewriter_at("docs/intro");

        let html = r#"<p><a href="./next.md">next</a> and <img src="./pic.png"></p>"#;

        assert_eq!(
            rewriter.apply(html),
            r#"<p><a href="/docs/intro/next">next</a> and <img src="./pic.png"></p>"#
        );
    }

    #[test]
    fn test_apply_multiple_anchors() {
        let rewriter = rewriter_at("guide");

        let html = r##"<a href="a.md">a</a><a href="#frag">f</a><a href="https://e.com">e</a>"##;

        assert_eq!(
            rewriter.apply(html),
            r##"<a href="/guide/a">a</a><a href="#frag">f</a><a href="https://e.com">e</a>"##
        );
    }
}
