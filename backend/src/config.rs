//! Server configuration file support.
//!
//! Settings are read from an optional TOML file and then overridden by
//! command-line flags or environment variables in the server binary.
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 9000
//! seed = false
//! body_limit_bytes = 65536
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up by [`AppConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "feedback.toml";

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid bind address {address}: {reason}")]
    BindAddress { address: String, reason: String },
}

/// Top-level configuration file layout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Pre-populate the store with example records at startup.
    #[serde(default = "default_seed")]
    pub seed: bool,
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_seed() -> bool {
    true
}

fn default_body_limit_bytes() -> usize {
    64 * 1024
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            seed: default_seed(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

impl ServerConfig {
    /// Resolve `host:port` to a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let address = format!("{}:{}", self.host, self.port);
        let mut addrs = address
            .to_socket_addrs()
            .map_err(|e| ConfigError::BindAddress {
                address: address.clone(),
                reason: e.to_string(),
            })?;

        addrs.next().ok_or_else(|| ConfigError::BindAddress {
            address,
            reason: "host resolved to no addresses".to_string(),
        })
    }
}

impl AppConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load configuration from the default location, if a file exists there.
    ///
    /// Searches for `feedback.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    ///
    /// Returns the defaults when no file is found.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }
}
