//! `folio build` command implementation.
//!
//! The static build step: enumerates every document via the static-params
//! generator and pre-renders each page to the output directory. A slug
//! `a/b` lands at `<out>/a/b/index.html`; the root document at
//! `<out>/index.html`.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_source::{ContentSource, FsSource, Slug};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for the generated site (default: dist/).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (log each rendered page).
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    /// Execute the build command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, a page cannot be resolved or
    /// rendered, or an output file cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let output_dir = self.output_dir.unwrap_or_else(|| PathBuf::from("dist"));

        output.info(&format!(
            "Source: {}",
            config.docs_resolved.source_dir.display()
        ));
        output.info(&format!("Output: {}", output_dir.display()));

        let source = FsSource::new(config.docs_resolved.source_dir.clone());
        let count = build_site(&source, &output_dir)?;

        output.success(&format!(
            "Built {count} pages to {}",
            output_dir.display()
        ));
        Ok(())
    }
}

/// Render every enumerated page into `output_dir`. Returns the page count.
fn build_site(source: &dyn ContentSource, output_dir: &Path) -> Result<usize, CliError> {
    let params = folio_page::generate_static_params(source)?;

    for page_params in &params {
        let document = folio_page::resolve(source, &page_params.slug)?;
        let html = folio_page::render(&document);

        let target = output_path(output_dir, &page_params.slug);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, html)?;

        tracing::info!(slug = %page_params.slug, target = %target.display(), "Rendered page");
    }

    Ok(params.len())
}

/// Output file path for a slug.
fn output_path(output_dir: &Path, slug: &Slug) -> PathBuf {
    slug.segments()
        .iter()
        .fold(output_dir.to_path_buf(), |p, s| p.join(s))
        .join("index.html")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_output_path_root() {
        assert_eq!(
            output_path(Path::new("dist"), &Slug::root()),
            PathBuf::from("dist/index.html")
        );
    }

    #[test]
    fn test_output_path_nested() {
        assert_eq!(
            output_path(Path::new("dist"), &Slug::parse("a/b")),
            PathBuf::from("dist/a/b/index.html")
        );
    }

    #[test]
    fn test_build_site_writes_every_page() {
        let temp = tempfile::tempdir().unwrap();
        let docs = temp.path().join("docs");
        let out = temp.path().join("dist");
        fs::create_dir_all(docs.join("domain")).unwrap();
        fs::write(docs.join("index.md"), "# Home").unwrap();
        fs::write(docs.join("guide.md"), "# Guide\n\nContent.").unwrap();
        fs::write(docs.join("domain/index.md"), "# Domain").unwrap();

        let source = FsSource::new(docs);

        let count = build_site(&source, &out).unwrap();

        assert_eq!(count, 3);
        assert!(out.join("index.html").is_file());
        assert!(out.join("guide/index.html").is_file());
        assert!(out.join("domain/index.html").is_file());

        let guide = fs::read_to_string(out.join("guide/index.html")).unwrap();
        assert!(guide.contains("<title>Guide</title>"));
    }

    #[test]
    fn test_build_site_empty_source() {
        let temp = tempfile::tempdir().unwrap();
        let out = temp.path().join("dist");

        let source = FsSource::new(temp.path().join("docs"));

        assert_eq!(build_site(&source, &out).unwrap(), 0);
    }
}
