//! Configuration loading and typed config structures for the server.
//!
//! Configuration is read from an optional YAML file (`swapi-config.yaml`,
//! or the path in `SWAPI_CONFIG`) and then overridden by environment
//! variables. Every field has a default, so the server runs with no
//! configuration at all: embedded fixtures, pretty JSON, and an ephemeral
//! port.
//!
//! # Environment overrides
//!
//! - `SWAPI_PORT` -- TCP port (`0` or unset picks a free port)
//! - `SWAPI_HOST` -- bind address
//! - `SWAPI_DATA_DIR` -- directory holding the six fixture files

use std::path::{Path, PathBuf};

use serde::Deserialize;
use swapi_api::ServerConfig;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "swapi-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override could not be parsed.
    #[error("invalid {name}: {reason}")]
    InvalidEnv {
        /// The offending variable.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level server configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    /// Listening address and response formatting.
    #[serde(default)]
    pub http: HttpConfig,

    /// Where the fixtures come from.
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Log filtering.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind; `None` picks a free port.
    #[serde(default)]
    pub port: Option<u16>,
    /// Pretty-print JSON responses.
    #[serde(default = "default_true")]
    pub pretty_json: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: None,
            pretty_json: true,
        }
    }
}

/// Fixture source settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DatasetConfig {
    /// Directory with the six fixture files; `None` uses the bundled set.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Refuse to start if any person's homeworld does not resolve.
    #[serde(default)]
    pub strict: bool,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_host() -> String {
    String::from("0.0.0.0")
}

fn default_filter() -> String {
    String::from("info")
}

const fn default_true() -> bool {
    true
}

impl ServiceConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Read and parse a YAML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    /// Load the config file (if any) and apply environment overrides.
    ///
    /// `SWAPI_CONFIG` names the file explicitly and must exist; otherwise
    /// `swapi-config.yaml` is used when present and defaults when not.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os("SWAPI_CONFIG") {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Apply `SWAPI_*` overrides read through `lookup`.
    ///
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        if let Some(port) = lookup("SWAPI_PORT") {
            let port: u16 = port.trim().parse().map_err(|e| ConfigError::InvalidEnv {
                name: "SWAPI_PORT",
                reason: format!("{e}"),
            })?;
            self.http.port = Some(port);
        }
        if let Some(host) = lookup("SWAPI_HOST") {
            self.http.host = host;
        }
        if let Some(dir) = lookup("SWAPI_DATA_DIR") {
            self.dataset.dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }

    /// Listener settings for the API server.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.http.host.clone(),
            port: self.http.port.unwrap_or(0),
        }
    }
}
