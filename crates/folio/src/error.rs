//! CLI error types.

use folio_config::ConfigError;
use folio_page::ResolveError;
use folio_source::SourceError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Source(#[from] SourceError),

    #[error("{0}")]
    Resolve(#[from] ResolveError),

    #[error("{0}")]
    Server(String),
}
