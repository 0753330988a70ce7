//! Markdown compilation for the filesystem source.
//!
//! Event-driven rendering over pulldown-cmark producing semantic HTML5,
//! slugified heading anchors, a table of contents (levels 2-6), and first-H1
//! title extraction. Anchor hrefs are emitted exactly as authored — relative
//! link resolution happens at page render time.

use std::collections::HashMap;
use std::fmt::Write;

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::source::TocEntry;

/// Result of compiling a markdown body.
#[derive(Clone, Debug)]
pub(crate) struct CompileResult {
    /// Compiled HTML content.
    pub html: String,
    /// Title extracted from the first H1 heading.
    pub title: Option<String>,
    /// Table of contents entries (levels 2-6).
    pub toc: Vec<TocEntry>,
}

/// Compile markdown text to HTML with GFM extensions enabled.
pub(crate) fn compile(markdown: &str) -> CompileResult {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM;

    let mut compiler = Compiler::default();
    for event in Parser::new_ext(markdown, options) {
        compiler.process_event(event);
    }
    compiler.finish()
}

/// Buffered heading state while between `Start(Heading)` and `End(Heading)`.
struct HeadingBuf {
    level: u8,
    text: String,
    html: String,
}

/// Markdown event compiler.
#[derive(Default)]
struct Compiler {
    output: String,
    title: Option<String>,
    toc: Vec<TocEntry>,
    heading: Option<HeadingBuf>,
    used_ids: HashMap<String, usize>,
    code: Option<(Option<String>, String)>,
    image: Option<(String, String, String)>,
    in_table_head: bool,
}

impl Compiler {
    fn finish(self) -> CompileResult {
        CompileResult {
            html: self.output,
            title: self.title,
            toc: self.toc,
        }
    }

    /// Push inline content to the output or the active heading buffer.
    fn push_inline(&mut self, content: &str) {
        if let Some(heading) = self.heading.as_mut() {
            heading.html.push_str(content);
        } else {
            self.output.push_str(content);
        }
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(&tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.push_inline(&html),
            Event::SoftBreak => self.push_inline("\n"),
            Event::HardBreak => self.push_inline("<br>"),
            Event::Rule => self.output.push_str("<hr>"),
            Event::TaskListMarker(checked) => {
                self.output.push_str(if checked {
                    r#"<input type="checkbox" disabled checked>"#
                } else {
                    r#"<input type="checkbox" disabled>"#
                });
            }
            // Footnotes and math are not supported
            _ => {}
        }
    }

    fn start_tag(&mut self, tag: &Tag<'_>) {
        match tag {
            Tag::Paragraph => self.output.push_str("<p>"),
            Tag::Heading { level, .. } => {
                self.heading = Some(HeadingBuf {
                    level: heading_level_to_num(*level),
                    text: String::new(),
                    html: String::new(),
                });
            }
            Tag::BlockQuote(_) => self.output.push_str("<blockquote>"),
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) if !info.is_empty() => info
                        .split_whitespace()
                        .next()
                        .map(str::to_owned),
                    _ => None,
                };
                self.code = Some((lang, String::new()));
            }
            Tag::List(start) => match start {
                Some(1) => self.output.push_str("<ol>"),
                Some(n) => write!(self.output, r#"<ol start="{n}">"#).unwrap(),
                None => self.output.push_str("<ul>"),
            },
            Tag::Item => self.output.push_str("<li>"),
            Tag::Table(_) => self.output.push_str("<table>"),
            Tag::TableHead => {
                self.in_table_head = true;
                self.output.push_str("<thead><tr>");
            }
            Tag::TableRow => self.output.push_str("<tr>"),
            Tag::TableCell => {
                self.output
                    .push_str(if self.in_table_head { "<th>" } else { "<td>" });
            }
            Tag::Emphasis => self.push_inline("<em>"),
            Tag::Strong => self.push_inline("<strong>"),
            Tag::Strikethrough => self.push_inline("<s>"),
            Tag::Link { dest_url, .. } => {
                let link_tag = format!(r#"<a href="{}">"#, escape_html(dest_url));
                self.push_inline(&link_tag);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                self.image = Some((dest_url.to_string(), title.to_string(), String::new()));
            }
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.output.push_str("</p>"),
            TagEnd::Heading(_) => self.complete_heading(),
            TagEnd::BlockQuote(_) => self.output.push_str("</blockquote>"),
            TagEnd::CodeBlock => {
                if let Some((lang, content)) = self.code.take() {
                    match lang {
                        Some(lang) => write!(
                            self.output,
                            r#"<pre><code class="language-{}">{}</code></pre>"#,
                            escape_html(&lang),
                            escape_html(&content)
                        )
                        .unwrap(),
                        None => write!(
                            self.output,
                            "<pre><code>{}</code></pre>",
                            escape_html(&content)
                        )
                        .unwrap(),
                    }
                }
            }
            TagEnd::List(ordered) => {
                self.output.push_str(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => self.output.push_str("</li>"),
            TagEnd::Table => self.output.push_str("</tbody></table>"),
            TagEnd::TableHead => {
                self.in_table_head = false;
                self.output.push_str("</tr></thead><tbody>");
            }
            TagEnd::TableRow => self.output.push_str("</tr>"),
            TagEnd::TableCell => {
                self.output
                    .push_str(if self.in_table_head { "</th>" } else { "</td>" });
            }
            TagEnd::Emphasis => self.push_inline("</em>"),
            TagEnd::Strong => self.push_inline("</strong>"),
            TagEnd::Strikethrough => self.push_inline("</s>"),
            TagEnd::Link => self.push_inline("</a>"),
            TagEnd::Image => {
                if let Some((src, title, alt)) = self.image.take() {
                    if title.is_empty() {
                        write!(
                            self.output,
                            r#"<img src="{}" alt="{}">"#,
                            escape_html(&src),
                            escape_html(&alt)
                        )
                        .unwrap();
                    } else {
                        write!(
                            self.output,
                            r#"<img src="{}" title="{}" alt="{}">"#,
                            escape_html(&src),
                            escape_html(&title),
                            escape_html(&alt)
                        )
                        .unwrap();
                    }
                }
            }
            _ => {}
        }
    }

    /// Write the buffered heading with a deduplicated anchor ID.
    fn complete_heading(&mut self) {
        let Some(heading) = self.heading.take() else {
            return;
        };

        let id = self.unique_id(&slugify(&heading.text));
        let level = heading.level;

        write!(
            self.output,
            r#"<h{level} id="{id}">{}</h{level}>"#,
            heading.html.trim()
        )
        .unwrap();

        if level == 1 {
            if self.title.is_none() {
                self.title = Some(heading.text.trim().to_owned());
            }
        } else {
            self.toc.push(TocEntry {
                level,
                title: heading.text.trim().to_owned(),
                id,
            });
        }
    }

    /// Deduplicate an anchor ID by appending a counter suffix.
    fn unique_id(&mut self, base: &str) -> String {
        let count = self.used_ids.entry(base.to_owned()).or_insert(0);
        *count += 1;
        if *count == 1 {
            base.to_owned()
        } else {
            format!("{base}-{}", *count - 1)
        }
    }

    fn text(&mut self, text: &str) {
        if let Some((_, content)) = self.code.as_mut() {
            content.push_str(text);
        } else if let Some((_, _, alt)) = self.image.as_mut() {
            alt.push_str(text);
        } else if let Some(heading) = self.heading.as_mut() {
            heading.text.push_str(text);
            let escaped = escape_html(text);
            heading.html.push_str(&escaped);
        } else {
            let escaped = escape_html(text);
            self.output.push_str(&escaped);
        }
    }

    fn inline_code(&mut self, code: &str) {
        if let Some(heading) = self.heading.as_mut() {
            heading.text.push_str(code);
            let _ = write!(heading.html, "<code>{}</code>", escape_html(code));
        } else {
            write!(self.output, "<code>{}</code>", escape_html(code)).unwrap();
        }
    }
}

/// Convert heading level enum to number (1-6).
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Escape HTML special characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Slugify heading text into an anchor ID.
///
/// Lowercases, keeps alphanumerics, and collapses runs of everything else
/// into single dashes. Falls back to `"section"` for all-symbol headings.
fn slugify(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !id.is_empty() {
                id.push('-');
            }
            pending_dash = false;
            for lower in c.to_lowercase() {
                id.push(lower);
            }
        } else {
            pending_dash = true;
        }
    }
    if id.is_empty() { "section".to_owned() } else { id }
}
