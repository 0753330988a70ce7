//! Configuration management for Folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerSection,
    /// Documentation configuration (paths are relative strings from TOML).
    docs: DocsSectionRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsSection,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7878,
        }
    }
}

/// Raw docs configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsSectionRaw {
    source_dir: Option<String>,
}

/// Resolved documentation configuration with base-relative paths applied.
#[derive(Debug, Default)]
pub struct DocsSection {
    /// Source directory for markdown files.
    pub source_dir: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Config file could not be parsed.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// Explicitly specified config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
}

impl Config {
    /// Load configuration.
    ///
    /// When `path` is given, that file is loaded and must exist. Otherwise
    /// `folio.toml` is auto-discovered from the current directory upward;
    /// if none is found, defaults apply. CLI settings override file values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing (explicit path only),
    /// unreadable, or not valid TOML.
    pub fn load(path: Option<&Path>, cli: Option<&CliSettings>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                Self::load_file(path)?
            }
            None => match discover(&std::env::current_dir().unwrap_or_default()) {
                Some(found) => Self::load_file(&found)?,
                None => Self::default(),
            },
        };

        if let Some(cli) = cli {
            config.apply_cli(cli);
        }
        Ok(config)
    }

    /// Load and resolve a config file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.resolve_paths(base);
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Defaults resolved against a base directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self {
            server: ServerSection::default(),
            docs: DocsSectionRaw::default(),
            docs_resolved: DocsSection::default(),
            config_path: None,
        };
        config.resolve_paths(base);
        config
    }

    /// Resolve raw path strings against the config file's directory.
    fn resolve_paths(&mut self, base: &Path) {
        let source_dir = self.docs.source_dir.as_deref().unwrap_or("docs");
        self.docs_resolved.source_dir = base.join(source_dir);
    }

    /// Apply CLI overrides on top of loaded values.
    fn apply_cli(&mut self, cli: &CliSettings) {
        if let Some(host) = &cli.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(source_dir) = &cli.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
    }
}

/// Search for `folio.toml` in `start` and its ancestors.
fn discover(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 7878);
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("./docs"));
    }

    #[test]
    fn test_load_explicit_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(
            &path,
            "[server]\nhost = \"0.0.0.0\"\nport = 9000\n\n[docs]\nsource_dir = \"content\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.docs_resolved.source_dir, temp.path().join("content"));
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[server]\nport = 4000\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.docs_resolved.source_dir, temp.path().join("docs"));
    }

    #[test]
    fn test_load_missing_explicit_file_is_error() {
        let result = Config::load(Some(Path::new("/nonexistent/folio.toml")), None);

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml_is_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[server\nhost=").unwrap();

        let result = Config::load(Some(&path), None);

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_cli_overrides() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[server]\nport = 4000\n").unwrap();

        let cli = CliSettings {
            host: Some("0.0.0.0".to_owned()),
            port: Some(5000),
            source_dir: Some(PathBuf::from("/srv/docs")),
        };

        let config = Config::load(Some(&path), Some(&cli)).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/srv/docs"));
    }

    #[test]
    fn test_discover_walks_ancestors() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "[server]\nport = 1\n").unwrap();

        let found = discover(&nested).unwrap();

        assert_eq!(found, temp.path().join(CONFIG_FILENAME));
    }

    #[test]
    fn test_discover_none_when_absent() {
        let temp = tempfile::tempdir().unwrap();

        // The temp dir is isolated; nothing above it should leak in unless a
        // folio.toml exists on an ancestor, which the assertion tolerates by
        // scoping discovery to the temp tree's own file.
        assert!(discover(temp.path()).is_none_or(|p| !p.starts_with(temp.path())));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("folio.toml");
        fs::write(&path, "[server]\nport = 4000\n\n[future]\nflag = true\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.server.port, 4000);
    }
}
