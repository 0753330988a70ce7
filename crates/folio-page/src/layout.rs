//! Documentation-page layout rendering.
//!
//! Produces the full HTML page for a resolved document: head metadata, the
//! table of contents, the title and description displayed verbatim, and the
//! body with relative anchor hrefs resolved against the document's canonical
//! location. Full-width documents drop the table-of-contents aside and carry
//! a modifier class instead.

use std::fmt::Write;

use folio_source::{Document, TocEntry, escape_html};

use crate::links::RelativeLinkRewriter;

/// Render a resolved document as a complete HTML page.
///
/// Title and description come from the document unchanged (HTML-escaped,
/// content verbatim). No state outside the returned string is touched.
#[must_use]
pub fn render(document: &Document) -> String {
    let mut out = String::with_capacity(document.body.len() + 1024);
    let title = escape_html(&document.title);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    writeln!(out, "<title>{title}</title>").unwrap();
    if let Some(description) = &document.description {
        writeln!(
            out,
            r#"<meta name="description" content="{}">"#,
            escape_html(description)
        )
        .unwrap();
    }
    out.push_str("</head>\n<body>\n");

    if document.full {
        out.push_str(r#"<main class="docs-page docs-page-full">"#);
    } else {
        out.push_str(r#"<main class="docs-page">"#);
        render_toc(&document.toc, &mut out);
    }
    out.push('\n');

    out.push_str(r#"<article class="docs-body">"#);
    out.push('\n');
    writeln!(out, r#"<h1 class="docs-title">{title}</h1>"#).unwrap();
    if let Some(description) = &document.description {
        writeln!(
            out,
            r#"<p class="docs-description">{}</p>"#,
            escape_html(description)
        )
        .unwrap();
    }

    let rewriter = RelativeLinkRewriter::new(document);
    out.push_str(&rewriter.apply(&document.body));

    out.push_str("\n</article>\n</main>\n</body>\n</html>\n");
    out
}

/// Render the table-of-contents aside.
fn render_toc(toc: &[TocEntry], out: &mut String) {
    if toc.is_empty() {
        return;
    }

    out.push_str("\n<nav class=\"docs-toc\">\n<ul>\n");
    for entry in toc {
        writeln!(
            out,
            r##"<li class="toc-level-{}"><a href="#{}">{}</a></li>"##,
            entry.level,
            entry.id,
            escape_html(&entry.title)
        )
        .unwrap();
    }
    out.push_str("</ul>\n</nav>");
}
