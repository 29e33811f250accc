//! Server configuration.
//!
//! Values come from four layers, later ones winning:
//!
//! 1. built-in defaults,
//! 2. a TOML file (`--config`),
//! 3. environment variables (`NEO4J_URI`, `NEO4J_USER`, `NEO4J_PASSWORD`,
//!    `MOVIEGRAPH_BIND`),
//! 4. command-line flags.
//!
//! ```toml
//! [server]
//! bind_address = "0.0.0.0:5000"
//! enable_cors = true
//!
//! [store]
//! backend = "memory"
//! fixture = "fixtures/movies.json"
//!
//! [log]
//! filter = "info,moviegraph_engine=debug"
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable overriding `store.uri`.
pub const ENV_NEO4J_URI: &str = "NEO4J_URI";
/// Environment variable overriding `store.user`.
pub const ENV_NEO4J_USER: &str = "NEO4J_USER";
/// Environment variable overriding `store.password`.
pub const ENV_NEO4J_PASSWORD: &str = "NEO4J_PASSWORD";
/// Environment variable overriding `server.bind_address`.
pub const ENV_BIND: &str = "MOVIEGRAPH_BIND";

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config file {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`AppConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range or malformed.
    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        /// Dotted key of the offending value.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The selected backend was not compiled in.
    #[error("store backend '{backend}' requires the '{feature}' feature")]
    FeatureDisabled {
        /// Backend name.
        backend: &'static str,
        /// Cargo feature that enables it.
        feature: &'static str,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Graph store settings.
    pub store: StoreConfig,
    /// Logging settings.
    pub log: LogConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind_address: String,
    /// Allow cross-origin requests from any origin.
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            enable_cors: true,
        }
    }
}

/// Graph store backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// In-process graph loaded from a JSON fixture.
    #[default]
    Memory,
    /// Remote Neo4j server.
    Neo4j,
}

impl Backend {
    /// Backend name as written in config.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Memory => "memory",
            Backend::Neo4j => "neo4j",
        }
    }
}

/// `[store]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Which backend to use.
    pub backend: Backend,
    /// Fixture file for the memory backend. Without one the graph is empty.
    pub fixture: Option<PathBuf>,
    /// Bolt URI for the neo4j backend.
    pub uri: String,
    /// Neo4j user.
    pub user: String,
    /// Neo4j password.
    pub password: String,
    /// Neo4j connection pool size.
    pub max_connections: usize,
    /// Records fetched per round trip.
    pub fetch_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Memory,
            fixture: None,
            uri: "bolt://localhost:7687".to_string(),
            user: "neo4j".to_string(),
            password: String::new(),
            max_connections: 16,
            fetch_size: 256,
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directives. `RUST_LOG` wins.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse TOML text. Missing keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Load `path` if given, otherwise start from defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Apply environment overrides. `lookup` returns the value of a variable,
    /// if set.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_NEO4J_URI) {
            self.store.uri = v;
        }
        if let Some(v) = lookup(ENV_NEO4J_USER) {
            self.store.user = v;
        }
        if let Some(v) = lookup(ENV_NEO4J_PASSWORD) {
            self.store.password = v;
        }
        if let Some(v) = lookup(ENV_BIND) {
            self.server.bind_address = v;
        }
    }

    /// Apply overrides from the process environment.
    pub fn apply_process_env(&mut self) {
        self.apply_env(|name| std::env::var(name).ok());
    }

    /// Parsed bind address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind_address
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                field: "server.bind_address",
                reason: format!("'{}': {}", self.server.bind_address, e),
            })
    }

    /// Check the configuration before startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;
        match self.store.backend {
            Backend::Memory => Ok(()),
            Backend::Neo4j => {
                if !cfg!(feature = "neo4j") {
                    return Err(ConfigError::FeatureDisabled {
                        backend: Backend::Neo4j.as_str(),
                        feature: "neo4j",
                    });
                }
                if self.store.uri.trim().is_empty() {
                    return Err(ConfigError::Invalid {
                        field: "store.uri",
                        reason: "must not be empty".to_string(),
                    });
                }
                if self.store.max_connections == 0 {
                    return Err(ConfigError::Invalid {
                        field: "store.max_connections",
                        reason: "must be at least 1".to_string(),
                    });
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn defaults() {
        let c = AppConfig::default();
        assert_eq!(c.server.bind_address, "0.0.0.0:5000");
        assert!(c.server.enable_cors);
        assert_eq!(c.store.backend, Backend::Memory);
        assert_eq!(c.log.filter, "info");
        assert!(c.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let c = AppConfig::from_toml("[server]\nbind_address = \"127.0.0.1:8080\"\n").unwrap();
        assert_eq!(c.server.bind_address, "127.0.0.1:8080");
        assert!(c.server.enable_cors);
        assert_eq!(c.store, StoreConfig::default());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AppConfig::from_toml("[server]\nport = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[store]\nfixture = \"movies.json\"\n[log]\nfilter = \"debug\"").unwrap();
        let c = AppConfig::load(file.path()).unwrap();
        assert_eq!(c.store.fixture, Some(PathBuf::from("movies.json")));
        assert_eq!(c.log.filter, "debug");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn env_overrides_file() {
        let mut c = AppConfig::from_toml("[store]\nuri = \"bolt://file:7687\"\n").unwrap();
        let env: HashMap<&str, &str> = [
            (ENV_NEO4J_URI, "bolt://env:7687"),
            (ENV_NEO4J_PASSWORD, "secret"),
            (ENV_BIND, "127.0.0.1:9000"),
        ]
        .into_iter()
        .collect();
        c.apply_env(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(c.store.uri, "bolt://env:7687");
        assert_eq!(c.store.user, "neo4j");
        assert_eq!(c.store.password, "secret");
        assert_eq!(c.server.bind_address, "127.0.0.1:9000");
    }

    #[test]
    fn bad_bind_address_is_invalid() {
        let mut c = AppConfig::default();
        c.server.bind_address = "localhost".into();
        assert!(matches!(
            c.validate(),
            Err(ConfigError::Invalid {
                field: "server.bind_address",
                ..
            })
        ));
    }

    #[cfg(not(feature = "neo4j"))]
    #[test]
    fn neo4j_backend_requires_feature() {
        let c = AppConfig::from_toml("[store]\nbackend = \"neo4j\"\n").unwrap();
        assert!(matches!(c.validate(), Err(ConfigError::FeatureDisabled { .. })));
    }
}
