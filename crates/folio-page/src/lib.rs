//! Page resolution and rendering for the Folio documentation engine.
//!
//! This crate is the page component behind every documentation route:
//! - [`resolve`]: slug lookup with a typed not-found result
//! - [`render`]: the documentation-page layout (title, description, table of
//!   contents, full-width flag, body with relative anchors resolved)
//! - [`generate_static_params`]: slug enumeration for the static build step
//! - [`generate_metadata`]: the plain `{title, description}` record for
//!   page-head generation
//!
//! The render path and the metadata path share one resolver, so they can
//! only disagree if the content source mutates between calls.
//!
//! # Quick Start
//!
//! ```ignore
//! use folio_page::{generate_metadata, render, resolve};
//! use folio_source::{FsSource, Slug};
//!
//! let source = FsSource::new("docs".into());
//! let slug = Slug::parse("guide");
//!
//! let document = resolve(&source, &slug)?;
//! let html = render(&document);
//! let meta = generate_metadata(&source, &slug)?;
//! ```

mod layout;
mod links;
mod metadata;
mod params;
mod resolver;

pub use layout::render;
pub use links::RelativeLinkRewriter;
pub use metadata::{PageMetadata, generate_metadata};
pub use params::generate_static_params;
pub use resolver::{ResolveError, resolve};
