use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::store::StoreConfig;

const DEFAULT_DATABASE: &str = "fiber-hrms";
const DEFAULT_COLLECTION: &str = "employees";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 20;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreSection,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// The file path comes from `HRMS_CONFIG` and defaults to `hrms.toml`.
    pub fn load() -> Result<Self> {
        let config_path = env::var("HRMS_CONFIG").unwrap_or_else(|_| "hrms.toml".to_string());
        Self::load_from(Some(Path::new(&config_path)))
    }

    /// Load configuration from an optional file, overlaid with `HRMS_*`
    /// environment variables (`HRMS_SERVER__PORT=8080`).
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            if path.exists() {
                builder = builder.add_source(config::File::from(PathBuf::from(path)));
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix("HRMS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        Ok(config)
    }

    /// Socket address the HTTP server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreSection {
    pub backend: StoreBackendKind,
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub connect_timeout_secs: u64,
}

impl StoreSection {
    pub fn to_runtime(&self) -> Result<StoreConfig> {
        match self.backend {
            StoreBackendKind::Memory => Ok(StoreConfig::Memory),
            StoreBackendKind::Mongo => {
                if self.uri.trim().is_empty() {
                    bail!("store.uri must be specified");
                }
                if self.database.trim().is_empty() {
                    bail!("store.database must be specified");
                }
                if self.collection.trim().is_empty() {
                    bail!("store.collection must be specified");
                }
                if self.connect_timeout_secs == 0 {
                    bail!("store.connect_timeout_secs must be greater than zero");
                }

                Ok(StoreConfig::Mongo {
                    uri: self.uri.trim().to_string(),
                    database: self.database.trim().to_string(),
                    collection: self.collection.trim().to_string(),
                    connect_timeout: Duration::from_secs(self.connect_timeout_secs),
                })
            }
        }
    }
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            backend: StoreBackendKind::Mongo,
            uri: format!("mongodb://localhost:27017/{}", DEFAULT_DATABASE),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackendKind {
    #[default]
    Mongo,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}
