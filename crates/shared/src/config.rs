//! Application configuration management.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Name of the metadata index file inside the storage directory.
pub const METADATA_FILE_NAME: &str = "metadata.json";

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Photo storage configuration.
    pub storage: StorageConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Photo storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the blob files and the metadata index.
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
    /// Maximum accepted upload body in bytes.
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("./data/photos")
}

fn default_max_upload_bytes() -> usize {
    StorageConfig::DEFAULT_MAX_UPLOAD_BYTES
}

impl StorageConfig {
    /// Default max upload size: 10 MiB.
    pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
}

/// Location of the metadata index file for a storage directory.
#[must_use]
pub fn metadata_path(base: &Path) -> PathBuf {
    base.join(METADATA_FILE_NAME)
}

/// Reads an environment variable, trimmed. Unset and blank values are `None`.
fn env_trimmed(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl AppConfig {
    /// Loads configuration from defaults, config files, and environment.
    ///
    /// `PORT` and `STORAGE_PATH` take precedence over everything else.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .set_default("server.host", default_host())?
            .set_default("server.port", i64::from(default_port()))?
            .set_default("storage.path", "./data/photos")?
            .set_default(
                "storage.max_upload_bytes",
                i64::try_from(StorageConfig::DEFAULT_MAX_UPLOAD_BYTES).unwrap_or(i64::MAX),
            )?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FOTOBOO").separator("__"))
            .set_override_option("server.port", env_trimmed("PORT"))?
            .set_override_option("storage.path", env_trimmed("STORAGE_PATH"))?
            .build()?;

        config.try_deserialize()
    }
}
