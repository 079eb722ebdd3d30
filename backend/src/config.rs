//! Server configuration.
//!
//! Configuration comes from an optional TOML file with environment-variable
//! overrides on top (`HOST`, `PORT`, `DATASET_DIR`), so a bare `cargo run`
//! works against the bundled demo dataset while deployments point at their
//! own data.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dataset: DatasetSettings,
}

/// Bind-address settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Dataset location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSettings {
    #[serde(default = "default_dataset_dir")]
    pub dir: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_dataset_dir() -> PathBuf {
    PathBuf::from("dataset")
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            dir: default_dataset_dir(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            dataset: DatasetSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {}", path.display(), e))?;
        let config: ServerConfig = toml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("failed to parse config file {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Resolve the effective configuration: the file at `CONFIG_PATH` when
    /// that variable is set, defaults otherwise, then env overrides.
    pub fn resolve() -> anyhow::Result<Self> {
        let mut config = match env::var("CONFIG_PATH") {
            Ok(path) => Self::from_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply `HOST`, `PORT`, and `DATASET_DIR` overrides when present.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Ok(dir) = env::var("DATASET_DIR") {
            self.dataset.dir = PathBuf::from(dir);
        }
    }

    /// Bind address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
