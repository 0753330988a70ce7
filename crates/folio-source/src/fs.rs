//! Filesystem-backed content source.
//!
//! Maps a directory of markdown files to documents:
//! - `index.md` is the root document
//! - `guide.md` is the `guide` document
//! - `domain/index.md` is the `domain` document
//! - `domain/page.md` is the `domain/page` document
//!
//! Hidden and underscore-prefixed files and directories are skipped. Nothing
//! is cached: every lookup re-reads and re-compiles the source file, so a
//! change on disk is visible on the next request.

use std::fs;
use std::path::{Path, PathBuf};

use crate::frontmatter;
use crate::markdown;
use crate::slug::Slug;
use crate::source::{ContentSource, Document, PageParams, SourceError};

/// Content source backed by a directory of markdown files.
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Create a filesystem source rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Check whether a slug is addressable through this source.
    ///
    /// Rejects traversal segments and anything hidden or underscore-prefixed,
    /// mirroring the scan-side skip rules so the two directions agree.
    fn is_addressable(slug: &Slug) -> bool {
        slug.segments()
            .iter()
            .all(|s| s != ".." && s != "." && !s.starts_with('.') && !s.starts_with('_'))
    }

    /// Candidate file paths for a slug, tried in order.
    fn candidates(&self, slug: &Slug) -> Vec<PathBuf> {
        if slug.is_root() {
            vec![self.root.join("index.md")]
        } else {
            let dir = slug
                .segments()
                .iter()
                .fold(self.root.clone(), |p, s| p.join(s));
            // Append ".md" verbatim; `with_extension` would clobber dotted segments.
            let mut file = dir.clone().into_os_string();
            file.push(".md");
            vec![PathBuf::from(file), dir.join("index.md")]
        }
    }

    /// Load and compile the document at `path` for `slug`.
    fn load(&self, path: &Path, slug: &Slug) -> Result<Document, SourceError> {
        let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let (matter, body) =
            frontmatter::split(&text).map_err(|message| SourceError::Frontmatter {
                path: path.to_path_buf(),
                message,
            })?;

        let compiled = markdown::compile(body);

        let title = matter
            .title
            .or(compiled.title)
            .unwrap_or_else(|| fallback_title(slug));

        Ok(Document {
            slug: slug.clone(),
            title,
            description: matter.description,
            body: compiled.html,
            toc: compiled.toc,
            full: matter.full,
            url: slug.url(),
        })
    }
}

/// Recursively collect document slugs under `dir`.
fn collect(dir: &Path, prefix: &[String], out: &mut Vec<Slug>) -> std::io::Result<()> {
    let mut entries: Vec<_> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(std::fs::DirEntry::file_name);

    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || name.starts_with('_') {
            continue;
        }

        let path = entry.path();
        if path.is_dir() {
            let mut nested = prefix.to_vec();
            nested.push(name);
            collect(&path, &nested, out)?;
        } else if let Some(stem) = name.strip_suffix(".md") {
            let slug = if stem == "index" {
                Slug::from_segments(prefix)
            } else {
                let mut segments = prefix.to_vec();
                segments.push(stem.to_owned());
                Slug::from_segments(&segments)
            };
            out.push(slug);
        }
    }
    Ok(())
}

impl ContentSource for FsSource {
    fn get_page(&self, slug: &Slug) -> Result<Option<Document>, SourceError> {
        if !Self::is_addressable(slug) {
            return Ok(None);
        }

        for candidate in self.candidates(slug) {
            if candidate.is_file() {
                return self.load(&candidate, slug).map(Some);
            }
        }
        Ok(None)
    }

    fn generate_params(&self) -> Result<Vec<PageParams>, SourceError> {
        let mut slugs = Vec::new();
        match collect(&self.root, &[], &mut slugs) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(root = %self.root.display(), "Source directory does not exist");
            }
            Err(source) => {
                return Err(SourceError::Io {
                    path: self.root.clone(),
                    source,
                });
            }
        }

        // `a.md` and `a/index.md` map to the same slug; enumerate it once.
        slugs.sort();
        slugs.dedup();

        Ok(slugs.into_iter().map(|slug| PageParams { slug }).collect())
    }
}

/// Title fallback when neither frontmatter nor an H1 provides one.
///
/// Derived from the last slug segment (`"setup-guide"` -> `"Setup Guide"`);
/// the root document falls back to `"Home"`.
fn fallback_title(slug: &Slug) -> String {
    match slug.segments().last() {
        Some(segment) => segment
            .split(['-', '_'])
            .filter(|w| !w.is_empty())
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
        None => "Home".to_owned(),
    }
}
