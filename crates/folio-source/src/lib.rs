//! Content source layer for the Folio documentation engine.
//!
//! This crate provides the [`ContentSource`] trait for abstracting document
//! lookup and enumeration from the underlying backend. This enables:
//!
//! - **Unit testing** without touching the real filesystem
//! - **Backend flexibility** (filesystem today, anything slug-addressable tomorrow)
//! - **Clean separation** between page resolution logic and content I/O
//!
//! # Architecture
//!
//! The crate provides:
//! - [`ContentSource`] trait with `get_page()` and `generate_params()` methods
//! - [`FsSource`] implementation backed by a directory of markdown files
//! - [`MockSource`] for testing (behind the `mock` feature flag)
//!
//! Documents are addressed by [`Slug`] — an ordered sequence of URL path
//! segments, with the empty sequence denoting the root document.
//!
//! # Example
//!
//! ```ignore
//! use std::path::PathBuf;
//! use folio_source::{ContentSource, FsSource, Slug};
//!
//! let source = FsSource::new(PathBuf::from("docs"));
//! let page = source.get_page(&Slug::parse("guide"))?;
//! for params in source.generate_params()? {
//!     println!("{}", params.slug);
//! }
//! ```

mod frontmatter;
mod fs;
mod markdown;
#[cfg(feature = "mock")]
mod mock;
mod slug;
mod source;

pub use fs::FsSource;
pub use markdown::escape_html;
#[cfg(feature = "mock")]
pub use mock::MockSource;
pub use slug::Slug;
pub use source::{ContentSource, Document, PageParams, SourceError, TocEntry};
