//! Application state.
//!
//! Shared state for all request handlers.

use std::sync::Arc;

use folio_source::ContentSource;

/// Application state shared across all handlers.
pub(crate) struct AppState {
    /// Content source for document lookup and enumeration.
    pub(crate) source: Arc<dyn ContentSource>,
    /// Enable verbose output (log resolved pages).
    pub(crate) verbose: bool,
}
