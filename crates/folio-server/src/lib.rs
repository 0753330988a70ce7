//! HTTP server for the Folio documentation engine.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - The catch-all documentation page route (rendered HTML)
//! - The metadata API (`{title, description}` records as JSON)
//!
//! Unmatched slugs surface as 404 responses; content-source failures map to
//! 500 and are otherwise left alone.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use folio_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "127.0.0.1".to_string(),
//!         port: 7878,
//!         source_dir: PathBuf::from("docs"),
//!         verbose: false,
//!         version: "1.0.0".to_string(),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum server (folio-server)
//!                        │
//!                        ├─► GET /, GET /{*slug} ──► resolve + render (folio-page)
//!                        │
//!                        └─► GET /api/metadata/... ──► resolve (folio-page)
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use folio_source::{ContentSource, FsSource};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Documentation source directory.
    pub source_dir: PathBuf,
    /// Enable verbose output.
    pub verbose: bool,
    /// Application version.
    pub version: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
            source_dir: PathBuf::from("docs"),
            verbose: false,
            version: String::new(),
        }
    }
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Create shared content source
    let source: Arc<dyn ContentSource> = Arc::new(FsSource::new(config.source_dir.clone()));

    // Create app state
    let state = Arc::new(AppState {
        source,
        verbose: config.verbose,
    });

    // Create router
    let app = app::create_router(state);

    // Bind and run server
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, version = %config.version, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from Folio config.
///
/// # Arguments
///
/// * `config` - Folio configuration
/// * `version` - Application version
/// * `verbose` - Enable verbose output
#[must_use]
pub fn server_config_from_config(
    config: &folio_config::Config,
    version: String,
    verbose: bool,
) -> ServerConfig {
    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        source_dir: config.docs_resolved.source_dir.clone(),
        verbose,
        version,
    }
}
